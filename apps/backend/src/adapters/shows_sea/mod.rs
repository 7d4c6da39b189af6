//! SeaORM adapter for shows.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{artists, shows, venues};

pub mod dto;

pub use dto::{ShowCreate, ShowListingRow};

pub async fn list_with_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ShowListingRow>, sea_orm::DbErr> {
    shows::Entity::find()
        .select_only()
        .column(shows::Column::Id)
        .column(shows::Column::VenueId)
        .column(shows::Column::ArtistId)
        .column(shows::Column::StartTime)
        .column_as(venues::Column::Name, "venue_name")
        .column_as(artists::Column::Name, "artist_name")
        .column_as(artists::Column::ImageLink, "artist_image_link")
        .join(JoinType::InnerJoin, shows::Relation::Venue.def())
        .join(JoinType::InnerJoin, shows::Relation::Artist.def())
        .order_by_asc(shows::Column::Id)
        .into_model::<ShowListingRow>()
        .all(conn)
        .await
}

pub async fn create_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ShowCreate,
) -> Result<shows::Model, sea_orm::DbErr> {
    shows::ActiveModel {
        id: NotSet,
        artist_id: Set(dto.artist_id),
        venue_id: Set(dto.venue_id),
        start_time: Set(dto.start_time),
    }
    .insert(conn)
    .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    shows::Entity::find().count(conn).await
}

pub async fn count_for_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    shows::Entity::find()
        .filter(shows::Column::VenueId.eq(venue_id))
        .count(conn)
        .await
}
