pub mod txn;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Access the database connection held by `AppState`.
///
/// Returns `AppError::DbUnavailable` when the state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("database is not configured"))
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn require_db_without_db_is_unavailable() {
        let app_state = AppState::without_db();

        let result = require_db(&app_state);
        assert!(matches!(result, Err(AppError::DbUnavailable { .. })));
    }

    #[test]
    fn unavailable_db_is_a_server_error() {
        let app_state = AppState::without_db();

        let Err(error) = require_db(&app_state) else {
            panic!("expected error");
        };
        assert_eq!(
            error.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
