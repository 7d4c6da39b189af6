//! Repository functions for the listing domain (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseBackend};

pub mod artists;
pub mod shows;
pub mod venues;

/// Build a `LIKE` pattern for a substring search.
///
/// `%`, `_` and `\` are escaped with `\`. Case folding happens in SQL, on
/// both the column and the pattern.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// SQLite's `LOWER` only folds ASCII letters, so non-ASCII terms are matched
/// in Rust instead.
pub(crate) fn folds_in_sql<C: ConnectionTrait>(conn: &C, term: &str) -> bool {
    term.is_ascii() || conn.get_database_backend() != DatabaseBackend::Sqlite
}

/// Unicode-aware case-insensitive substring test.
pub fn name_contains(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Split a stored genres string into display items.
///
/// Tolerates the `{Jazz,Reggae}` array-literal form found in older rows.
pub fn split_genres(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(|g| g.trim().trim_matches('"').to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

/// Join submitted genres for storage; `None` when nothing was selected.
pub fn join_genres(genres: &[String]) -> Option<String> {
    let kept: Vec<&str> = genres
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(","))
    }
}
