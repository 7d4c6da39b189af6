use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::flash;
use crate::views::{self, HomePage};

async fn index(session: Session) -> Result<HttpResponse, AppError> {
    views::render(&HomePage {
        flashes: flash::take(&session),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
