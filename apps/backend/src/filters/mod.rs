//! Template filters. Askama resolves `|name(..)` to `filters::name` in scope
//! of the template struct.

pub mod datetime;

use std::fmt::Display;

pub use self::datetime::{format_datetime, parse_timestamp, DateFormatError, DateStyle};

/// `{{ value|datetime("full") }}`
pub fn datetime<T: Display>(value: T, style: &str) -> askama::Result<String> {
    format_datetime(&value.to_string(), Some(style))
        .map_err(|e| askama::Error::Custom(Box::new(e)))
}
