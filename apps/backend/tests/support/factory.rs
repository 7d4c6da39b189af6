use sea_orm::ConnectionTrait;
use showbook::repos::artists::{self, Artist, ArtistInput};
use showbook::repos::shows::{self, NewShow, Show};
use showbook::repos::venues::{self, Venue, VenueInput};
use time::macros::datetime;
use time::PrimitiveDateTime;

/// A show far in the future.
pub const UPCOMING: PrimitiveDateTime = datetime!(2030-01-01 20:00:00);
/// A show far in the past.
pub const PAST: PrimitiveDateTime = datetime!(2019-05-21 21:30:00);

pub async fn seed_venue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    city: &str,
    state: &str,
) -> Venue {
    venues::create_venue(
        conn,
        VenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main St".to_string(),
            ..VenueInput::default()
        },
    )
    .await
    .expect("seed venue")
}

pub async fn seed_artist<C: ConnectionTrait + Send + Sync>(conn: &C, name: &str) -> Artist {
    artists::create_artist(
        conn,
        ArtistInput {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            image_link: Some(format!("https://img.example/{}.jpg", name.len())),
            ..ArtistInput::default()
        },
    )
    .await
    .expect("seed artist")
}

pub async fn seed_show<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    artist_id: i32,
    venue_id: i32,
    start_time: PrimitiveDateTime,
) -> Show {
    shows::create_show(
        conn,
        NewShow {
            artist_id,
            venue_id,
            start_time,
        },
    )
    .await
    .expect("seed show")
}
