//! Template structs for every page. Handlers build these from repository
//! results; nothing here touches the database.

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;

use crate::domain::Area;
use crate::error::AppError;
use crate::filters;
use crate::filters::datetime::to_timestamp_string;
use crate::forms::choices::{GENRES, STATES};
use crate::forms::{ArtistForm, ShowForm, VenueForm};
use crate::repos::artists::{Artist, ArtistDetail, ArtistShow, ArtistSummary};
use crate::repos::shows::ShowListing;
use crate::repos::venues::{Venue, VenueDetail, VenueShow, VenueSummary};

/// Render a page as a 200 HTML response.
pub fn render<T: Template>(page: &T) -> Result<HttpResponse, AppError> {
    let html = page.render()?;
    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(html))
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flashes: Vec<String>,
    pub areas: Vec<Area<VenueSummary>>,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flashes: Vec<String>,
    pub artists: Vec<ArtistSummary>,
}

/// A row of the shows page with the start time in text form.
pub struct ShowRow {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link.unwrap_or_default(),
            start_time: to_timestamp_string(show.start_time),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flashes: Vec<String>,
    pub shows: Vec<ShowRow>,
}

#[derive(Template)]
#[template(path = "pages/search_venues.html")]
pub struct SearchVenuesPage {
    pub flashes: Vec<String>,
    pub search_term: String,
    pub count: usize,
    pub results: Vec<VenueSummary>,
}

#[derive(Template)]
#[template(path = "pages/search_artists.html")]
pub struct SearchArtistsPage {
    pub flashes: Vec<String>,
    pub search_term: String,
    pub count: usize,
    pub results: Vec<ArtistSummary>,
}

/// A show on a detail page: the counterpart listing plus the start time.
pub struct ShowCard {
    pub id: i32,
    pub name: String,
    pub image_link: String,
    pub start_time: String,
}

impl From<VenueShow> for ShowCard {
    fn from(show: VenueShow) -> Self {
        Self {
            id: show.artist_id,
            name: show.artist_name,
            image_link: show.artist_image_link.unwrap_or_default(),
            start_time: to_timestamp_string(show.start_time),
        }
    }
}

impl From<ArtistShow> for ShowCard {
    fn from(show: ArtistShow) -> Self {
        Self {
            id: show.venue_id,
            name: show.venue_name,
            image_link: show.venue_image_link.unwrap_or_default(),
            start_time: to_timestamp_string(show.start_time),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
pub struct VenueDetailPage {
    pub flashes: Vec<String>,
    pub venue: Venue,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetailPage {
    pub fn new(flashes: Vec<String>, detail: VenueDetail) -> Self {
        let past_shows_count = detail.shows.past_count();
        let upcoming_shows_count = detail.shows.upcoming_count();
        Self {
            flashes,
            genres: detail.venue.genre_list(),
            venue: detail.venue,
            past_shows: detail.shows.past.into_iter().map(ShowCard::from).collect(),
            upcoming_shows: detail
                .shows
                .upcoming
                .into_iter()
                .map(ShowCard::from)
                .collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
pub struct ArtistDetailPage {
    pub flashes: Vec<String>,
    pub artist: Artist,
    pub genres: Vec<String>,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetailPage {
    pub fn new(flashes: Vec<String>, detail: ArtistDetail) -> Self {
        let past_shows_count = detail.shows.past_count();
        let upcoming_shows_count = detail.shows.upcoming_count();
        Self {
            flashes,
            genres: detail.artist.genre_list(),
            artist: detail.artist,
            past_shows: detail.shows.past.into_iter().map(ShowCard::from).collect(),
            upcoming_shows: detail
                .shows
                .upcoming
                .into_iter()
                .map(ShowCard::from)
                .collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/new_venue.html")]
pub struct NewVenuePage {
    pub flashes: Vec<String>,
    pub form: VenueForm,
    pub errors: Vec<String>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

impl NewVenuePage {
    pub fn new(flashes: Vec<String>, form: VenueForm, errors: Vec<String>) -> Self {
        Self {
            flashes,
            form,
            errors,
            states: STATES,
            genre_choices: GENRES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/edit_venue.html")]
pub struct EditVenuePage {
    pub flashes: Vec<String>,
    pub venue_id: i32,
    pub form: VenueForm,
    pub errors: Vec<String>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

impl EditVenuePage {
    pub fn new(flashes: Vec<String>, venue_id: i32, form: VenueForm, errors: Vec<String>) -> Self {
        Self {
            flashes,
            venue_id,
            form,
            errors,
            states: STATES,
            genre_choices: GENRES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/new_artist.html")]
pub struct NewArtistPage {
    pub flashes: Vec<String>,
    pub form: ArtistForm,
    pub errors: Vec<String>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

impl NewArtistPage {
    pub fn new(flashes: Vec<String>, form: ArtistForm, errors: Vec<String>) -> Self {
        Self {
            flashes,
            form,
            errors,
            states: STATES,
            genre_choices: GENRES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/edit_artist.html")]
pub struct EditArtistPage {
    pub flashes: Vec<String>,
    pub artist_id: i32,
    pub form: ArtistForm,
    pub errors: Vec<String>,
    pub states: &'static [&'static str],
    pub genre_choices: &'static [&'static str],
}

impl EditArtistPage {
    pub fn new(flashes: Vec<String>, artist_id: i32, form: ArtistForm, errors: Vec<String>) -> Self {
        Self {
            flashes,
            artist_id,
            form,
            errors,
            states: STATES,
            genre_choices: GENRES,
        }
    }
}

#[derive(Template)]
#[template(path = "forms/new_show.html")]
pub struct NewShowPage {
    pub flashes: Vec<String>,
    pub form: ShowForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub flashes: Vec<String>,
}

impl NotFoundPage {
    pub fn new() -> Self {
        Self {
            flashes: Vec::new(),
        }
    }
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct InternalErrorPage {
    pub flashes: Vec<String>,
}

impl InternalErrorPage {
    pub fn new() -> Self {
        Self {
            flashes: Vec::new(),
        }
    }
}

impl Default for InternalErrorPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::partition;

    fn venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: Some("1015 Folsom Street".to_string()),
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: Some("Jazz,Reggae".to_string()),
            website_link: None,
            seeking_talent: true,
            seeking_description: Some("We are on the lookout".to_string()),
        }
    }

    fn show(artist_id: i32, name: &str, at: time::PrimitiveDateTime) -> VenueShow {
        VenueShow {
            artist_id,
            artist_name: name.to_string(),
            artist_image_link: None,
            start_time: at,
        }
    }

    #[test]
    fn venue_detail_counts_and_formats_shows() {
        let shows = vec![
            show(4, "Guns N Petals", datetime!(2019-05-21 21:30:00)),
            show(5, "Matt Quevedo", datetime!(2035-04-01 20:00:00)),
        ];
        let detail = VenueDetail {
            venue: venue(),
            shows: partition(shows, datetime!(2026-01-01 00:00:00)),
        };

        let page = VenueDetailPage::new(vec!["hello".to_string()], detail);
        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 1);
        assert_eq!(page.genres, vec!["Jazz", "Reggae"]);

        let html = page.render().unwrap();
        assert!(html.contains("1015 Folsom Street"));
        assert!(html.contains("No Phone"));
        assert!(html.contains("We are on the lookout"));
        assert!(html.contains("Tuesday May, 21, 2019 at 9:30PM"));
        assert!(html.contains("href=\"/artists/5\""));
        assert!(html.contains("hello"));
    }

    #[test]
    fn form_page_marks_selected_choices() {
        let form = VenueForm {
            state: "CA".to_string(),
            genres: vec!["Jazz".to_string()],
            seeking_talent: true,
            ..VenueForm::default()
        };
        let errors = vec!["name: This field is required.".to_string()];
        let html = NewVenuePage::new(Vec::new(), form, errors).render().unwrap();
        assert!(html.contains("<option value=\"CA\" selected>"));
        assert!(html.contains("<option value=\"Jazz\" selected>"));
        assert!(!html.contains("<option value=\"Blues\" selected>"));
        assert!(html.contains("value=\"y\" checked"));
        assert!(html.contains("name: This field is required."));
    }

    #[test]
    fn error_pages_render() {
        assert!(NotFoundPage::new().render().unwrap().contains("404"));
        assert!(InternalErrorPage::new().render().unwrap().contains("500"));
    }
}
