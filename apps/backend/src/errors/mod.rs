//! Error handling for the showbook backend.

pub mod domain;

pub use domain::DomainError;
