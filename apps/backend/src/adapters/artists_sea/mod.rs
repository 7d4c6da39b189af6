//! SeaORM adapter for artists.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{artists, shows, venues};

pub mod dto;

pub use dto::ArtistFields;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find()
        .order_by_asc(artists::Column::Id)
        .all(conn)
        .await
}

/// Substring match on `name`, lowering both sides in SQL; `pattern` must
/// already be escaped.
pub async fn search_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pattern: &str,
) -> Result<Vec<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find()
        .filter(
            Expr::cust_with_values(
                r#"LOWER("artists"."name") LIKE LOWER(?) ESCAPE '\'"#,
                [pattern],
            ),
        )
        .order_by_asc(artists::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<artists::Model>, sea_orm::DbErr> {
    artists::Entity::find_by_id(id).one(conn).await
}

pub async fn create_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ArtistFields,
) -> Result<artists::Model, sea_orm::DbErr> {
    let mut active = artists::ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    apply_fields(&mut active, dto);
    active.insert(conn).await
}

pub async fn update_artist<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    dto: ArtistFields,
) -> Result<artists::Model, sea_orm::DbErr> {
    let mut active = artists::ActiveModel {
        id: sea_orm::Unchanged(id),
        ..Default::default()
    };
    apply_fields(&mut active, dto);
    active.update(conn).await
}

pub async fn delete_with_shows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist: artists::Model,
) -> Result<u64, sea_orm::DbErr> {
    let removed = shows::Entity::delete_many()
        .filter(shows::Column::ArtistId.eq(artist.id))
        .exec(conn)
        .await?
        .rows_affected;
    artist.delete(conn).await?;
    Ok(removed)
}

/// Shows an artist plays, each with its venue.
pub async fn shows_with_venues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i32,
) -> Result<Vec<(shows::Model, Option<venues::Model>)>, sea_orm::DbErr> {
    shows::Entity::find()
        .filter(shows::Column::ArtistId.eq(artist_id))
        .find_also_related(venues::Entity)
        .order_by_asc(shows::Column::StartTime)
        .all(conn)
        .await
}

fn apply_fields(active: &mut artists::ActiveModel, dto: ArtistFields) {
    active.name = Set(dto.name);
    active.city = Set(dto.city);
    active.state = Set(dto.state);
    active.phone = Set(dto.phone);
    active.genres = Set(dto.genres);
    active.image_link = Set(dto.image_link);
    active.facebook_link = Set(dto.facebook_link);
    active.website_link = Set(dto.website_link);
    active.seeking_venues = Set(Some(dto.seeking_venues));
    active.seeking_description = Set(dto.seeking_description);
}
