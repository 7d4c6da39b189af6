//! Artist repository functions.

use sea_orm::ConnectionTrait;
use time::PrimitiveDateTime;
use tracing::debug;

use super::{folds_in_sql, join_genres, like_pattern, name_contains, split_genres};
use crate::adapters::artists_sea::{self as artists_adapter, ArtistFields};
use crate::domain::{flags, partition, Partitioned, Scheduled};
use crate::entities::{artists, shows, venues};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Artist domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn genre_list(&self) -> Vec<String> {
        split_genres(self.genres.as_deref())
    }
}

impl From<artists::Model> for Artist {
    fn from(model: artists::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.unwrap_or_default(),
            city: model.city.unwrap_or_default(),
            state: model.state.unwrap_or_default(),
            phone: model.phone,
            genres: model.genres,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_venues: flags::decode(model.seeking_venues.as_deref()),
            seeking_description: model.seeking_description,
        }
    }
}

/// Editable artist fields; an update replaces all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venues: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistInput> for ArtistFields {
    fn from(input: ArtistInput) -> Self {
        Self {
            name: Some(input.name),
            city: Some(input.city),
            state: Some(input.state),
            phone: input.phone,
            genres: join_genres(&input.genres),
            image_link: input.image_link,
            facebook_link: input.facebook_link,
            website_link: input.website_link,
            seeking_venues: flags::encode(input.seeking_venues),
            seeking_description: input.seeking_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl From<artists::Model> for ArtistSummary {
    fn from(model: artists::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.unwrap_or_default(),
            city: model.city.unwrap_or_default(),
            state: model.state.unwrap_or_default(),
        }
    }
}

/// A show an artist plays, with the venue's display fields
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

impl From<(shows::Model, Option<venues::Model>)> for ArtistShow {
    fn from((show, venue): (shows::Model, Option<venues::Model>)) -> Self {
        let (venue_name, venue_image_link) = match venue {
            Some(v) => (v.name.unwrap_or_default(), v.image_link),
            None => (String::new(), None),
        };
        Self {
            venue_id: show.venue_id,
            venue_name,
            venue_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub shows: Partitioned<ArtistShow>,
}

fn not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Artist, format!("Artist {id} not found"))
}

pub async fn list_artists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ArtistSummary>, DomainError> {
    let artists = artists_adapter::list_all(conn).await?;
    Ok(artists.into_iter().map(ArtistSummary::from).collect())
}

/// Artists whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<ArtistSummary>, DomainError> {
    let term = term.trim();
    let found = if term.is_empty() {
        artists_adapter::list_all(conn).await?
    } else if !folds_in_sql(conn, term) {
        artists_adapter::list_all(conn)
            .await?
            .into_iter()
            .filter(|artist| name_contains(artist.name.as_deref().unwrap_or_default(), term))
            .collect()
    } else {
        artists_adapter::search_by_name(conn, &like_pattern(term)).await?
    };
    debug!(term, matches = found.len(), "artist search");
    Ok(found.into_iter().map(ArtistSummary::from).collect())
}

pub async fn find_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Artist>, DomainError> {
    let artist = artists_adapter::find_by_id(conn, id).await?;
    Ok(artist.map(Artist::from))
}

pub async fn require_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Artist, DomainError> {
    find_artist(conn, id).await?.ok_or_else(|| not_found(id))
}

pub async fn find_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    now: PrimitiveDateTime,
) -> Result<ArtistDetail, DomainError> {
    let artist = require_artist(conn, id).await?;
    let shows = artists_adapter::shows_with_venues(conn, id)
        .await?
        .into_iter()
        .map(ArtistShow::from)
        .collect();
    Ok(ArtistDetail {
        artist,
        shows: partition(shows, now),
    })
}

pub async fn create_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: ArtistInput,
) -> Result<Artist, DomainError> {
    let artist = artists_adapter::create_artist(conn, input.into()).await?;
    Ok(Artist::from(artist))
}

pub async fn update_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    input: ArtistInput,
) -> Result<Artist, DomainError> {
    if artists_adapter::find_by_id(conn, id).await?.is_none() {
        return Err(not_found(id));
    }
    let artist = artists_adapter::update_artist(conn, id, input.into()).await?;
    Ok(Artist::from(artist))
}

pub async fn delete_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Artist, DomainError> {
    let model = artists_adapter::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let artist = Artist::from(model.clone());
    let removed_shows = artists_adapter::delete_with_shows(conn, model).await?;
    debug!(artist_id = id, removed_shows, "artist deleted");
    Ok(artist)
}
