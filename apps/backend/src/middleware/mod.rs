pub mod request_trace;
pub mod session;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use session::{session_key, session_middleware};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
