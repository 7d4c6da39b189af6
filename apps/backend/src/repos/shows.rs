//! Show repository functions.

use sea_orm::ConnectionTrait;
use time::PrimitiveDateTime;

use crate::adapters::shows_sea::{self as shows_adapter, ShowCreate, ShowListingRow};
use crate::adapters::{artists_sea, venues_sea};
use crate::entities::shows;
use crate::errors::domain::DomainError;

/// Show domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: PrimitiveDateTime,
}

impl From<shows::Model> for Show {
    fn from(model: shows::Model) -> Self {
        Self {
            id: model.id,
            artist_id: model.artist_id,
            venue_id: model.venue_id,
            start_time: model.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: PrimitiveDateTime,
}

/// A row of the shows page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

impl From<ShowListingRow> for ShowListing {
    fn from(row: ShowListingRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name.unwrap_or_default(),
            artist_id: row.artist_id,
            artist_name: row.artist_name.unwrap_or_default(),
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}

pub async fn list_shows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ShowListing>, DomainError> {
    let rows = shows_adapter::list_with_names(conn).await?;
    Ok(rows.into_iter().map(ShowListing::from).collect())
}

/// Book an artist at a venue. Both must exist; double booking is allowed.
pub async fn create_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    show: NewShow,
) -> Result<Show, DomainError> {
    if artists_sea::find_by_id(conn, show.artist_id).await?.is_none() {
        return Err(DomainError::validation(format!(
            "Artist {} does not exist",
            show.artist_id
        )));
    }
    if venues_sea::find_by_id(conn, show.venue_id).await?.is_none() {
        return Err(DomainError::validation(format!(
            "Venue {} does not exist",
            show.venue_id
        )));
    }

    let created = shows_adapter::create_show(
        conn,
        ShowCreate {
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
        },
    )
    .await?;
    Ok(Show::from(created))
}

pub async fn count_shows<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(shows_adapter::count_all(conn).await?)
}

pub async fn count_shows_at_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i32,
) -> Result<u64, DomainError> {
    Ok(shows_adapter::count_for_venue(conn, venue_id).await?)
}
