use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::{info, trace, warn};

use crate::config::db::{
    make_conn_spec, max_connections, validate_db_config, DbKind, DbOwner, PoolPurpose,
    RuntimeEnv,
};
use crate::error::DbInfraError;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| DbInfraError::Connect {
        message: "no error recorded after max attempts".to_string(),
    }))
}

/// Sanitize database URL by masking the password.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        // "postgresql://user" has its only colon inside the scheme
        Some(colon_pos) if !auth_part[colon_pos..].starts_with("://") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

async fn connect_with(
    url: &str,
    db_kind: DbKind,
    purpose: PoolPurpose,
) -> Result<DatabaseConnection, DbInfraError> {
    let max = max_connections(db_kind, purpose);
    let mut opt = ConnectOptions::new(url);
    opt.min_connections(1)
        .max_connections(max)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let connect = || {
        let opt = opt.clone();
        async move {
            Database::connect(opt)
                .await
                .map_err(|e| DbInfraError::Connect {
                    message: format!(
                        "failed to connect to {} ({}): {e}",
                        db_kind,
                        sanitize_db_url(url)
                    ),
                })
        }
    };

    let pool = match db_kind {
        DbKind::Postgres => retry_connection(connect, 5, 500).await?,
        DbKind::SqliteFile | DbKind::SqliteMemory => connect().await?,
    };

    if db_kind == DbKind::SqliteFile {
        setup_sqlite_file_prerequisites(&pool).await?;
    }

    Ok(pool)
}

/// Connect a runtime pool for the given owner. Does NOT run migrations.
pub async fn connect_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;
    let url = make_conn_spec(env, db_kind, owner)?;
    connect_with(&url, db_kind, PoolPurpose::Runtime).await
}

/// Single-connection pool with owner credentials, used for schema changes.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;
    let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;
    connect_with(&url, db_kind, PoolPurpose::Migration).await
}

/// Returns true when every defined migration is already applied, in order.
async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    let (current_count, current_last) = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => (
            migrations.len(),
            migrations.last().map(|m| m.name().to_string()),
        ),
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::Migration {
                message: format!("failed to get applied migrations: {e}"),
            });
        }
    };

    let is_up_to_date = current_count == expected_count
        && !expected_last.is_empty()
        && current_last.as_deref() == Some(expected_last.as_str());

    let outcome = if is_up_to_date { "hit" } else { "miss" };
    trace!(
        fastpath = outcome,
        current_count,
        expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );

    Ok(is_up_to_date)
}

async fn run_command(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    info!("migrate=start env={:?} db_kind={} command={:?}", env, db_kind, command);

    if command == MigrationCommand::Up && fast_path_schema_check(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })?;

    if matches!(
        command,
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
    ) {
        let expected_count = Migrator::migrations().len();
        let applied_count = migration::count_applied_migrations(pool)
            .await
            .unwrap_or(0);
        if applied_count != expected_count {
            return Err(DbInfraError::Migration {
                message: format!(
                    "Migration verification failed: expected {expected_count} migrations, but {applied_count} were applied (env={env:?}, db_kind={db_kind})"
                ),
            });
        }
    }

    info!("migrate=done");
    Ok(())
}

/// Entry point for the migration CLI.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    if db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory SQLite is ephemeral; migrating it from the CLI has no effect",
        ));
    }
    let admin_pool = build_admin_pool(env, db_kind).await?;
    run_command(&admin_pool, env, db_kind, command).await
}

/// Connect the application pool and bring the schema up to date.
///
/// Postgres migrates through a separate owner pool; SQLite has no roles, so
/// the runtime pool migrates itself (and for in-memory databases it must,
/// since a second pool would see a different database).
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            let admin_pool = build_admin_pool(env, db_kind).await?;
            run_command(&admin_pool, env, db_kind, MigrationCommand::Up).await?;
            if let Err(e) = admin_pool.close().await {
                warn!(error = %e, "failed to close admin pool");
            }
            connect_pool(env, db_kind, DbOwner::App).await
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let pool = connect_pool(env, db_kind, DbOwner::App).await?;
            run_command(&pool, env, db_kind, MigrationCommand::Up).await?;
            Ok(pool)
        }
    }
}

async fn setup_sqlite_file_prerequisites(pool: &DatabaseConnection) -> Result<(), DbInfraError> {
    use sea_orm::{DatabaseBackend, Statement};

    for pragma in [
        "PRAGMA journal_mode = WAL;",
        "PRAGMA synchronous = NORMAL;",
        "PRAGMA foreign_keys = ON;",
    ] {
        pool.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::Connect {
                message: format!("failed to apply '{pragma}': {e}"),
            })?;
    }

    Ok(())
}
