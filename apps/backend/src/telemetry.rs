use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use showbook::config::AppConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON events to stdout; non-debug runs also append warnings and errors
/// to `config.error_log_path`.
pub fn init_tracing(config: &AppConfig) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sqlx=warn,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json()
        .with_filter(env_filter);

    let error_log_layer = if config.debug {
        None
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.error_log_path)?;
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(LevelFilter::WARN),
        )
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(error_log_layer)
        .init();

    Ok(())
}
