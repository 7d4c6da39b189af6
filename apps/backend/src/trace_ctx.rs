//! Per-request trace id, set by `RequestTrace` and read by error pages and
//! the form extractor.

use std::future::Future;

use tokio::task_local;

/// Shown on error pages rendered outside a traced request.
pub const UNTRACED: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// The trace id of the request being handled.
pub fn current() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNTRACED.to_string())
}

/// Run `fut` with `trace_id` as the current id.
pub async fn scope<F: Future>(trace_id: String, fut: F) -> F::Output {
    TRACE_ID.scope(trace_id, fut).await
}
