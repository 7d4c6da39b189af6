//! Venue repository functions.

use sea_orm::ConnectionTrait;
use time::PrimitiveDateTime;
use tracing::debug;

use super::{folds_in_sql, join_genres, like_pattern, name_contains, split_genres};
use crate::adapters::venues_sea::{self as venues_adapter, VenueFields};
use crate::domain::{flags, group_by_area, partition, Area, Partitioned, Scheduled};
use crate::entities::{artists, shows, venues};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Venue domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    pub fn genre_list(&self) -> Vec<String> {
        split_genres(self.genres.as_deref())
    }
}

impl From<venues::Model> for Venue {
    fn from(model: venues::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.unwrap_or_default(),
            city: model.city.unwrap_or_default(),
            state: model.state.unwrap_or_default(),
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            genres: model.genres,
            website_link: model.website_link,
            seeking_talent: flags::decode(model.seeking_talent.as_deref()),
            seeking_description: model.seeking_description,
        }
    }
}

/// Editable venue fields; an update replaces all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueInput> for VenueFields {
    fn from(input: VenueInput) -> Self {
        Self {
            name: Some(input.name),
            city: Some(input.city),
            state: Some(input.state),
            address: Some(input.address),
            phone: input.phone,
            image_link: input.image_link,
            facebook_link: input.facebook_link,
            genres: join_genres(&input.genres),
            website_link: input.website_link,
            seeking_talent: flags::encode(input.seeking_talent),
            seeking_description: input.seeking_description,
        }
    }
}

/// Venue as shown in listings and search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl From<venues::Model> for VenueSummary {
    fn from(model: venues::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.unwrap_or_default(),
            city: model.city.unwrap_or_default(),
            state: model.state.unwrap_or_default(),
        }
    }
}

/// A show at a venue, with the performing artist's display fields
#[derive(Debug, Clone, PartialEq)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> PrimitiveDateTime {
        self.start_time
    }
}

impl From<(shows::Model, Option<artists::Model>)> for VenueShow {
    fn from((show, artist): (shows::Model, Option<artists::Model>)) -> Self {
        let (artist_name, artist_image_link) = match artist {
            Some(a) => (a.name.unwrap_or_default(), a.image_link),
            None => (String::new(), None),
        };
        Self {
            artist_id: show.artist_id,
            artist_name,
            artist_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: Partitioned<VenueShow>,
}

fn not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Venue, format!("Venue {id} not found"))
}

/// All venues grouped by (city, state).
pub async fn list_areas<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Area<VenueSummary>>, DomainError> {
    let venues = venues_adapter::list_all(conn).await?;
    let summaries = venues.into_iter().map(VenueSummary::from).collect();
    Ok(group_by_area(summaries, |v: &VenueSummary| {
        (v.city.clone(), v.state.clone())
    }))
}

/// Venues whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<VenueSummary>, DomainError> {
    let term = term.trim();
    let found = if term.is_empty() {
        venues_adapter::list_all(conn).await?
    } else if !folds_in_sql(conn, term) {
        venues_adapter::list_all(conn)
            .await?
            .into_iter()
            .filter(|venue| name_contains(venue.name.as_deref().unwrap_or_default(), term))
            .collect()
    } else {
        venues_adapter::search_by_name(conn, &like_pattern(term)).await?
    };
    debug!(term, matches = found.len(), "venue search");
    Ok(found.into_iter().map(VenueSummary::from).collect())
}

pub async fn find_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<Venue>, DomainError> {
    let venue = venues_adapter::find_by_id(conn, id).await?;
    Ok(venue.map(Venue::from))
}

pub async fn require_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Venue, DomainError> {
    find_venue(conn, id).await?.ok_or_else(|| not_found(id))
}

/// Venue with its shows split around `now`.
pub async fn find_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    now: PrimitiveDateTime,
) -> Result<VenueDetail, DomainError> {
    let venue = require_venue(conn, id).await?;
    let shows = venues_adapter::shows_with_artists(conn, id)
        .await?
        .into_iter()
        .map(VenueShow::from)
        .collect();
    Ok(VenueDetail {
        venue,
        shows: partition(shows, now),
    })
}

pub async fn create_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: VenueInput,
) -> Result<Venue, DomainError> {
    let venue = venues_adapter::create_venue(conn, input.into()).await?;
    Ok(Venue::from(venue))
}

/// Replace every editable field of venue `id`.
pub async fn update_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    input: VenueInput,
) -> Result<Venue, DomainError> {
    if venues_adapter::find_by_id(conn, id).await?.is_none() {
        return Err(not_found(id));
    }
    let venue = venues_adapter::update_venue(conn, id, input.into()).await?;
    Ok(Venue::from(venue))
}

/// Delete venue `id` and its shows; returns the deleted venue.
pub async fn delete_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Venue, DomainError> {
    let model = venues_adapter::find_by_id(conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let venue = Venue::from(model.clone());
    let removed_shows = venues_adapter::delete_with_shows(conn, model).await?;
    debug!(venue_id = id, removed_shows, "venue deleted");
    Ok(venue)
}
