//! Infrastructure layer: state construction and database error mapping.

pub mod db_errors;
pub mod state;
