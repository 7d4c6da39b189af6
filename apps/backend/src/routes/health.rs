//! `/health`: liveness plus the listing database's schema state.

use actix_web::{web, HttpResponse};
use migration::{count_applied_migrations, get_latest_migration_version, Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct Health {
    /// `ok` when the database answers and every migration is applied.
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    db_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: SchemaState,
    time: String,
}

#[derive(Debug, Default, Serialize)]
struct SchemaState {
    latest: Option<String>,
    applied: usize,
    defined: usize,
}

impl SchemaState {
    fn is_current(&self) -> bool {
        self.applied == self.defined
    }
}

async fn schema_state(db: &DatabaseConnection) -> Result<SchemaState, DbErr> {
    db.query_one(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await?;
    Ok(SchemaState {
        latest: get_latest_migration_version(db).await?,
        applied: count_applied_migrations(db).await?,
        defined: Migrator::migrations().len(),
    })
}

async fn health(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());
    let db_kind = state.db_kind.map(|kind| kind.to_string());

    let (db, db_error, migrations) = match state.db() {
        None => ("unavailable", None, SchemaState::default()),
        Some(conn) => match schema_state(conn).await {
            Ok(schema) => ("ok", None, schema),
            Err(e) => {
                warn!(error = %e, "health check query failed");
                ("error", Some(e.to_string()), SchemaState::default())
            }
        },
    };

    let status = if db == "ok" && migrations.is_current() {
        "ok"
    } else {
        "degraded"
    };

    Ok(HttpResponse::Ok().json(Health {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_kind,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
