use db_infra::bootstrap_db;
use db_infra::db::{DbKind, RuntimeEnv};
use tracing::info;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            Some(db_kind) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(self.env, db_kind).await?;
                info!(env = ?self.env, db_kind = %db_kind, "database ready");
                Ok(AppState::new(conn, db_kind))
            }
            None => Ok(AppState::without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_succeeds_without_db_option() {
        let state = build_state().build().await.unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn build_with_memory_db_is_migrated() {
        let state = build_state()
            .with_env(RuntimeEnv::Test)
            .with_db(DbKind::SqliteMemory)
            .build()
            .await
            .unwrap();
        let db = state.db().unwrap();
        assert_eq!(
            migration::count_applied_migrations(db).await.unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn prod_memory_db_is_rejected() {
        let err = build_state()
            .with_env(RuntimeEnv::Prod)
            .with_db(DbKind::SqliteMemory)
            .build()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
