mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::pages::{
    assert_error_page, assert_html, body_text, redirect_target, response_cookie,
};
use showbook::repos::{shows, venues};
use support::app_builder::SESSION_COOKIE;
use support::create_test_app;
use support::factory::{seed_artist, seed_show, seed_venue, PAST, UPCOMING};

use crate::common::{memory_state, post_form};

const BLUE_NOTE: &str = "name=The+Blue+Note&city=Nashville&state=TN&address=1+Broadway\
&phone=615-555-0100&genres=Jazz&genres=Blues&seeking_talent=y\
&seeking_description=Looking+for+trios";

#[actix_web::test]
async fn listing_a_venue_then_booking_a_show() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let app = builder.build().await;

    let resp = test::call_service(&app, post_form("/venues/create", BLUE_NOTE).to_request()).await;
    assert_html(resp.status(), resp.headers(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Venue The Blue Note was successfully listed!"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/venues").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("Nashville, TN"));
    assert!(body.contains("The Blue Note"));

    let db = state.db().expect("db");
    let venue = venues::search(db, "blue note").await.unwrap().remove(0);
    let artist = seed_artist(db, "Guns N Petals").await;

    let form = format!(
        "artist_id={}&venue_id={}&start_time=2030-01-01+20%3A00%3A00",
        artist.id, venue.id
    );
    let resp = test::call_service(&app, post_form("/shows/create", &form).to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("Show was successfully listed!"));

    let detail = venues::find_detail(db, venue.id, showbook::domain::now_utc())
        .await
        .unwrap();
    assert_eq!(detail.shows.upcoming_count(), 1);
    assert_eq!(detail.shows.past_count(), 0);
    assert_eq!(detail.venue.genre_list(), vec!["Jazz", "Blues"]);
    assert!(detail.venue.seeking_talent);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}", venue.id))
            .to_request(),
    )
    .await;
    let body = body_text(resp).await;
    assert!(body.contains("1 Upcoming Show"));
    assert!(body.contains("0 Past Shows"));
    assert!(body.contains("Tuesday January, 1, 2030 at 8:00PM"));
    assert!(body.contains("Guns N Petals"));
}

#[actix_web::test]
async fn venues_are_grouped_by_area_in_first_appearance_order() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let db = state.db().expect("db");
    seed_venue(db, "Park Square", "San Francisco", "CA").await;
    seed_venue(db, "Dueling Pianos", "New York", "NY").await;
    seed_venue(db, "The Musical Hop", "San Francisco", "CA").await;

    let areas = venues::list_areas(db).await.unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
    let names: Vec<_> = areas[0].venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Park Square", "The Musical Hop"]);
    assert_eq!(areas[1].city, "New York");

    let app = builder.build().await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/venues").to_request()).await;
    let body = body_text(resp).await;
    let sf = body.find("San Francisco, CA").expect("sf area");
    let ny = body.find("New York, NY").expect("ny area");
    assert!(sf < ny);
}

#[actix_web::test]
async fn search_is_case_insensitive_and_empty_term_matches_all() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let db = state.db().expect("db");
    seed_venue(db, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    seed_venue(db, "The Dueling Pianos Bar", "New York", "NY").await;
    let app = builder.build().await;

    let resp = test::call_service(&app, post_form("/venues/search", "search_term=Hop").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains(": 1</h3>"));
    assert!(body.contains("The Musical Hop"));

    let resp = test::call_service(&app, post_form("/venues/search", "search_term=MUSIC").to_request()).await;
    assert!(body_text(resp).await.contains(": 2</h3>"));

    let resp = test::call_service(&app, post_form("/venues/search", "search_term=").to_request()).await;
    assert!(body_text(resp).await.contains(": 3</h3>"));

    let resp = test::call_service(&app, post_form("/venues/search", "search_term=zzz").to_request()).await;
    assert!(body_text(resp).await.contains(": 0</h3>"));

    // LIKE wildcards in the term are literal
    assert!(venues::search(db, "%").await.unwrap().is_empty());
}

#[actix_web::test]
async fn search_folds_non_ascii_names() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let db = state.db().expect("db");
    seed_venue(db, "Émile Hall", "Montréal", "NY").await;
    seed_venue(db, "Zoë's Garage", "Austin", "TX").await;

    for term in ["Émile", "émile", "ÉMILE HALL"] {
        let found = venues::search(db, term).await.unwrap();
        assert_eq!(found.len(), 1, "term {term}");
        assert_eq!(found[0].name, "Émile Hall");
    }
    assert_eq!(venues::search(db, "ZOË").await.unwrap().len(), 1);
    assert_eq!(venues::search(db, "hall").await.unwrap().len(), 1);

    let app = builder.build().await;
    let resp = test::call_service(
        &app,
        post_form("/venues/search", "search_term=%C3%A9mile").to_request(),
    )
    .await;
    let body = body_text(resp).await;
    assert!(body.contains(": 1</h3>"));
    assert!(body.contains("Émile Hall"));
}

#[actix_web::test]
async fn detail_splits_past_and_upcoming_shows() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(db, "The Wild Sax Band").await;
    seed_show(db, artist.id, venue.id, PAST).await;
    seed_show(db, artist.id, venue.id, UPCOMING).await;
    seed_show(db, artist.id, venue.id, UPCOMING).await;

    let detail = venues::find_detail(db, venue.id, showbook::domain::now_utc())
        .await
        .unwrap();
    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.upcoming_count(), 2);
    assert_eq!(
        detail.shows.past_count() + detail.shows.upcoming_count(),
        shows::count_shows_at_venue(db, venue.id).await.unwrap() as usize
    );

    let app = builder.build().await;
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}", venue.id))
            .to_request(),
    )
    .await;
    let body = body_text(resp).await;
    assert!(body.contains("2 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
}

#[actix_web::test]
async fn unknown_venue_renders_not_found_page() {
    let app = create_test_app(memory_state().await).build().await;

    for uri in ["/venues/999", "/venues/999/edit", "/venues/99999999999"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = body_text(resp).await;
        assert_error_page(status, &headers, &body, StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn invalid_submission_rerenders_form_with_errors() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let app = builder.build().await;

    let resp = test::call_service(
        &app,
        post_form("/venues/create", "name=Half+Done&city=&state=TN&phone=12").to_request(),
    )
    .await;
    assert_html(resp.status(), resp.headers(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("An error occurred. Venue Half Done could not be listed."));
    assert!(body.contains("city: This field is required."));
    assert!(body.contains("address: This field is required."));
    assert!(body.contains("value=\"Half Done\""));

    let db = state.db().expect("db");
    assert!(venues::search(db, "").await.unwrap().is_empty());
}

#[actix_web::test]
async fn edit_replaces_every_field_and_flashes_on_redirect() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let app = builder.build().await;

    test::call_service(&app, post_form("/venues/create", BLUE_NOTE).to_request()).await;
    let db = state.db().expect("db");
    let venue = venues::search(db, "").await.unwrap().remove(0);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}/edit", venue.id))
            .to_request(),
    )
    .await;
    let body = body_text(resp).await;
    assert!(body.contains("value=\"The Blue Note\""));
    assert!(body.contains("<option value=\"TN\" selected>"));
    assert!(body.contains("<option value=\"Jazz\" selected>"));

    let resp = test::call_service(
        &app,
        post_form(
            &format!("/venues/{}/edit", venue.id),
            "name=Blue+Note+East&city=Memphis&state=TN&address=2+Beale+St",
        )
        .to_request(),
    )
    .await;
    let target = redirect_target(resp.status(), resp.headers());
    assert_eq!(target, format!("/venues/{}", venue.id));
    let cookie = response_cookie(&resp, SESSION_COOKIE).expect("flash cookie");

    let updated = venues::require_venue(db, venue.id).await.unwrap();
    assert_eq!(updated.name, "Blue Note East");
    assert_eq!(updated.city, "Memphis");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.genres, None);
    assert!(!updated.seeking_talent);
    assert_eq!(updated.seeking_description, None);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&target).cookie(cookie).to_request(),
    )
    .await;
    let body = body_text(resp).await;
    assert!(body.contains("Venue Blue Note East was successfully updated!"));
}

#[actix_web::test]
async fn edit_of_missing_venue_is_not_found() {
    let app = create_test_app(memory_state().await).build().await;

    let resp = test::call_service(
        &app,
        post_form("/venues/42/edit", "name=Ghost&city=Nowhere&state=TN&address=0+Void").to_request(),
    )
    .await;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = body_text(resp).await;
    assert_error_page(status, &headers, &body, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_removes_venue_and_its_shows() {
    let builder = create_test_app(memory_state().await);
    let state = builder.state();
    let db = state.db().expect("db");
    let venue = seed_venue(db, "The Blue Note", "Nashville", "TN").await;
    let other = seed_venue(db, "Park Square", "San Francisco", "CA").await;
    let artist = seed_artist(db, "Matt Quevedo").await;
    seed_show(db, artist.id, venue.id, UPCOMING).await;
    seed_show(db, artist.id, venue.id, PAST).await;
    seed_show(db, artist.id, other.id, UPCOMING).await;
    let app = builder.build().await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}/delete", venue.id))
            .to_request(),
    )
    .await;
    assert_eq!(redirect_target(resp.status(), resp.headers()), "/");
    let cookie = response_cookie(&resp, SESSION_COOKIE).expect("flash cookie");

    assert_eq!(shows::count_shows_at_venue(db, venue.id).await.unwrap(), 0);
    assert_eq!(shows::count_shows(db).await.unwrap(), 1);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").cookie(cookie).to_request()).await;
    assert!(body_text(resp).await.contains("Venue The Blue Note was successfully deleted!"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}", venue.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // a second delete fails but still redirects home
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/venues/{}/delete", venue.id))
            .to_request(),
    )
    .await;
    assert_eq!(redirect_target(resp.status(), resp.headers()), "/");
    let cookie = response_cookie(&resp, SESSION_COOKIE).expect("flash cookie");
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").cookie(cookie).to_request()).await;
    assert!(body_text(resp).await.contains("An error occurred. Venue could not be deleted."));
}
