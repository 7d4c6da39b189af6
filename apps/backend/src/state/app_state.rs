use db_infra::db::DbKind;
use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Which backend the connection talks to
    pub db_kind: Option<DbKind>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, db_kind: DbKind) -> Self {
        Self {
            db: Some(db),
            db_kind: Some(db_kind),
        }
    }

    /// State without a database connection (for testing)
    pub fn without_db() -> Self {
        Self {
            db: None,
            db_kind: None,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
