use actix_web::{web, App, HttpServer};
use showbook::config::{AppConfig, RuntimeEnv};
use showbook::infra::state::build_state;
use showbook::middleware::session::{session_key, session_middleware};
use showbook::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use showbook::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_tracing(&config) {
        eprintln!(
            "❌ Cannot open error log {}: {e}",
            config.error_log_path.display()
        );
        std::process::exit(1);
    }

    let key = match session_key(config.session_key.as_deref()) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("❌ Invalid session key: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(config.db_kind)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        secure_cookies = config.secure_cookies,
        db_kind = %config.db_kind,
        "showbook starting"
    );

    let data = web::Data::new(app_state);
    let secure_cookies = config.secure_cookies;

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(key.clone(), secure_cookies))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
