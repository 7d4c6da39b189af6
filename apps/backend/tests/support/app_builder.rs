use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Key;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use showbook::middleware::session::session_middleware;
use showbook::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use showbook::routes;
use showbook::AppState;

/// Name of the cookie carrying flash messages between requests.
pub const SESSION_COOKIE: &str = "showbook_session";

/// Builder for test services wired like `main.rs`.
pub struct TestAppBuilder {
    state: web::Data<AppState>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state: web::Data::new(state),
        }
    }

    /// Handle on the shared state, for seeding and inspecting the database.
    pub fn state(&self) -> web::Data<AppState> {
        self.state.clone()
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let key = Key::from(&[7u8; 64][..]);

        test::init_service(
            App::new()
                .wrap(session_middleware(key, false))
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(self.state)
                .configure(routes::configure)
                .default_service(web::to(routes::not_found)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
