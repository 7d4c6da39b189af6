//! Backend test support utilities: logging initialization and helpers for
//! asserting on rendered HTML responses.

pub mod logging;
pub mod pages;
