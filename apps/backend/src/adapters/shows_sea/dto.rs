//! DTOs for shows_sea adapter.

use sea_orm::FromQueryResult;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCreate {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: PrimitiveDateTime,
}

/// One row of the all-shows listing, joined with venue and artist names.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct ShowListingRow {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: Option<String>,
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}
