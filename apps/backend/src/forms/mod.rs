//! HTML form extraction and binding.
//!
//! `FormFields` collects an `application/x-www-form-urlencoded` body as an
//! ordered multimap; the per-resource `bind` functions turn it into typed
//! input or field-level `FormErrors`.

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::trace_ctx;

pub use artist::ArtistForm;
pub use show::ShowForm;
pub use venue::VenueForm;

/// Upper bound on accepted form bodies.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Submitted form fields in submission order; names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        let pairs = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Trimmed value, or an empty string when the field is absent.
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(str::trim).unwrap_or_default().to_string()
    }

    /// Trimmed value; `None` when absent or blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Checkbox semantics: present with a truthy value.
    pub fn checked(&self, name: &str) -> bool {
        self.get(name)
            .map(|v| crate::domain::flags::decode(Some(v)))
            .unwrap_or(false)
    }

    /// Every non-blank value of a repeated field.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.get_all(name)
            .into_iter()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl FromRequest for FormFields {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let trace_id = trace_ctx::current();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read form body chunk");
                    AppError::bad_request("Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_FORM_BYTES {
                    return Err(AppError::bad_request("Form body too large"));
                }
                body.extend_from_slice(&chunk);
            }

            let fields = FormFields::parse(&body);
            debug!(trace_id = %trace_id, fields = fields.pairs.len(), "form parsed");
            Ok(fields)
        })
    }
}

/// Field-level binding errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(&'static str, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    /// `field: message` lines for display above a form.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(f, m)| format!("{f}: {m}"))
            .collect()
    }

    /// `Ok(value)` when no error was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Record an error when a required field is blank; returns the trimmed value.
pub(crate) fn required(
    fields: &FormFields,
    errors: &mut FormErrors,
    name: &'static str,
) -> String {
    let value = fields.text(name);
    if value.is_empty() {
        errors.add(name, "This field is required.");
    }
    value
}

/// Optional link field; must be an absolute http(s) URL when present.
pub(crate) fn optional_url(
    fields: &FormFields,
    errors: &mut FormErrors,
    name: &'static str,
) -> Option<String> {
    let value = fields.optional(name)?;
    match url::Url::parse(&value) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Some(value),
        _ => {
            errors.add(name, "Invalid URL.");
            None
        }
    }
}

/// Optional phone number: digits with common separators.
pub(crate) fn optional_phone(
    fields: &FormFields,
    errors: &mut FormErrors,
    name: &'static str,
) -> Option<String> {
    let value = fields.optional(name)?;
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '(' | ')' | '+' | '.'));
    if allowed && (7..=15).contains(&digits) {
        Some(value)
    } else {
        errors.add(name, "Invalid phone number.");
        None
    }
}
