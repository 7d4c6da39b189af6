//! Pure listing rules: flag encoding, show scheduling and area grouping.

pub mod areas;
pub mod flags;
pub mod schedule;

pub use areas::{group_by_area, Area};
pub use schedule::{now_utc, partition, Partitioned, Scheduled};
