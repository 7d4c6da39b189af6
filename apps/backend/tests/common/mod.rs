#![allow(dead_code)]

use actix_web::http::header::ContentType;
use actix_web::test::TestRequest;
use showbook::config::{DbKind, RuntimeEnv};
use showbook::infra::state::build_state;
use showbook::AppState;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh, migrated in-memory database.
pub async fn memory_state() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("in-memory state should build")
}

/// POST with an urlencoded body written by hand, so repeated keys survive.
pub fn post_form(uri: &str, body: &str) -> TestRequest {
    TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body.to_string())
}
