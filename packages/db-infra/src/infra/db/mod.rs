pub mod core;

pub use core::{bootstrap_db, build_admin_pool, connect_pool, orchestrate_migration, sanitize_db_url};
