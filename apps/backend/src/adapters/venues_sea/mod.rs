//! SeaORM adapter for venues.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{artists, shows, venues};

pub mod dto;

pub use dto::VenueFields;

// Adapter functions return DbErr; repos map to DomainError via From<DbErr>.

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find()
        .order_by_asc(venues::Column::Id)
        .all(conn)
        .await
}

/// Substring match on `name`, lowering both sides in SQL; `pattern` must
/// already be escaped.
pub async fn search_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pattern: &str,
) -> Result<Vec<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find()
        .filter(
            Expr::cust_with_values(
                r#"LOWER("venues"."name") LIKE LOWER(?) ESCAPE '\'"#,
                [pattern],
            ),
        )
        .order_by_asc(venues::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<venues::Model>, sea_orm::DbErr> {
    venues::Entity::find_by_id(id).one(conn).await
}

pub async fn create_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VenueFields,
) -> Result<venues::Model, sea_orm::DbErr> {
    let mut active = venues::ActiveModel {
        id: NotSet,
        ..Default::default()
    };
    apply_fields(&mut active, dto);
    active.insert(conn).await
}

/// Overwrite every editable column of an existing venue.
pub async fn update_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    dto: VenueFields,
) -> Result<venues::Model, sea_orm::DbErr> {
    let mut active = venues::ActiveModel {
        id: sea_orm::Unchanged(id),
        ..Default::default()
    };
    apply_fields(&mut active, dto);
    active.update(conn).await
}

/// Delete a venue together with its shows. Returns the number of shows removed.
pub async fn delete_with_shows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue: venues::Model,
) -> Result<u64, sea_orm::DbErr> {
    let removed = shows::Entity::delete_many()
        .filter(shows::Column::VenueId.eq(venue.id))
        .exec(conn)
        .await?
        .rows_affected;
    venue.delete(conn).await?;
    Ok(removed)
}

/// Shows held at a venue, each with the performing artist.
pub async fn shows_with_artists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    venue_id: i32,
) -> Result<Vec<(shows::Model, Option<artists::Model>)>, sea_orm::DbErr> {
    shows::Entity::find()
        .filter(shows::Column::VenueId.eq(venue_id))
        .find_also_related(artists::Entity)
        .order_by_asc(shows::Column::StartTime)
        .all(conn)
        .await
}

fn apply_fields(active: &mut venues::ActiveModel, dto: VenueFields) {
    active.name = Set(dto.name);
    active.city = Set(dto.city);
    active.state = Set(dto.state);
    active.address = Set(dto.address);
    active.phone = Set(dto.phone);
    active.image_link = Set(dto.image_link);
    active.facebook_link = Set(dto.facebook_link);
    active.genres = Set(dto.genres);
    active.website_link = Set(dto.website_link);
    active.seeking_talent = Set(Some(dto.seeking_talent));
    active.seeking_description = Set(dto.seeking_description);
}
