use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, TransactionTrait};
use showbook::db::txn::SharedTxn;

/// Begin a transaction the test owns; `with_txn` will neither commit nor roll it back.
pub async fn open(conn: &DatabaseConnection) -> SharedTxn {
    let txn = conn.begin().await.expect("Failed to begin transaction");
    SharedTxn(Arc::new(txn))
}

/// Make `with_txn` calls for this request run inside `shared`.
pub fn inject(req: &mut HttpRequest, shared: &SharedTxn) {
    req.extensions_mut().insert(shared.clone());
}

pub async fn rollback(shared: SharedTxn) -> Result<(), sea_orm::DbErr> {
    let txn = Arc::try_unwrap(shared.0).map_err(|_| {
        sea_orm::DbErr::Custom("Cannot rollback: transaction is still shared".to_string())
    })?;
    txn.rollback().await
}

pub async fn commit(shared: SharedTxn) -> Result<(), sea_orm::DbErr> {
    let txn = Arc::try_unwrap(shared.0).map_err(|_| {
        sea_orm::DbErr::Custom("Cannot commit: transaction is still shared".to_string())
    })?;
    txn.commit().await
}
