//! One-shot notifications carried in the signed session cookie.
//!
//! Messages pushed during a request are shown by the next page rendered,
//! which may be the same response or the target of a redirect.

use actix_session::Session;
use tracing::warn;

const FLASH_KEY: &str = "_flashes";

/// Queue a message for the next rendered page.
pub fn push(session: &Session, message: impl Into<String>) {
    let mut queued = peek(session);
    queued.push(message.into());
    if let Err(e) = session.insert(FLASH_KEY, queued) {
        warn!(error = %e, "failed to store flash message");
    }
}

/// Remove and return every queued message.
pub fn take(session: &Session) -> Vec<String> {
    let queued = peek(session);
    if !queued.is_empty() {
        session.remove(FLASH_KEY);
    }
    queued
}

fn peek(session: &Session) -> Vec<String> {
    match session.get::<Vec<String>>(FLASH_KEY) {
        Ok(Some(messages)) => messages,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "discarding unreadable flash messages");
            Vec::new()
        }
    }
}

/// `Venue The Blue Note`, or just `Venue` when the submitted name is blank.
fn subject(kind: &str, name: &str) -> String {
    match name.trim() {
        "" => kind.to_string(),
        name => format!("{kind} {name}"),
    }
}

pub fn listed(kind: &str, name: &str) -> String {
    format!("{} was successfully listed!", subject(kind, name))
}

pub fn not_listed(kind: &str, name: &str) -> String {
    format!("An error occurred. {} could not be listed.", subject(kind, name))
}

pub fn updated(kind: &str, name: &str) -> String {
    format!("{} was successfully updated!", subject(kind, name))
}

pub fn not_updated(kind: &str, name: &str) -> String {
    format!("An error occurred. {} could not be updated.", subject(kind, name))
}

pub fn deleted(kind: &str, name: &str) -> String {
    format!("{} was successfully deleted!", subject(kind, name))
}

pub fn not_deleted(kind: &str) -> String {
    format!("An error occurred. {kind} could not be deleted.")
}

pub const SHOW_LISTED: &str = "Show was successfully listed!";
pub const SHOW_NOT_LISTED: &str = "An error occurred. Show could not be listed.";
