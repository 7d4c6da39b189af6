//! Artist pages: listing, search, detail, create, edit and delete.

use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{error, info};

use super::see_other;
use crate::db::txn::with_txn;
use crate::domain::now_utc;
use crate::error::AppError;
use crate::flash;
use crate::forms::{ArtistForm, FormFields};
use crate::repos::artists;
use crate::state::AppState;
use crate::views::{
    self, ArtistDetailPage, ArtistsPage, EditArtistPage, HomePage, NewArtistPage, SearchArtistsPage,
};

const KIND: &str = "Artist";

/// GET /artists
async fn index(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let artists = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(artists::list_artists(txn).await?) })
    })
    .await?;

    views::render(&ArtistsPage {
        flashes: flash::take(&session),
        artists,
    })
}

/// POST /artists/search
async fn search(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let search_term = fields.text("search_term");
    let term = search_term.clone();
    let results = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(artists::search(txn, &term).await?) })
    })
    .await?;

    views::render(&SearchArtistsPage {
        flashes: flash::take(&session),
        search_term,
        count: results.len(),
        results,
    })
}

/// GET /artists/{id}
async fn detail(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let now = now_utc();
    let detail = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(artists::find_detail(txn, id, now).await?) })
    })
    .await?;

    views::render(&ArtistDetailPage::new(flash::take(&session), detail))
}

/// GET /artists/create
async fn create_form(session: Session) -> Result<HttpResponse, AppError> {
    views::render(&NewArtistPage::new(
        flash::take(&session),
        ArtistForm::default(),
        Vec::new(),
    ))
}

/// POST /artists/create
async fn create_submit(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let input = match ArtistForm::bind(&fields) {
        Ok(input) => input,
        Err(errors) => {
            flash::push(&session, flash::not_listed(KIND, &fields.text("name")));
            return views::render(&NewArtistPage::new(
                flash::take(&session),
                ArtistForm::from_fields(&fields),
                errors.messages(),
            ));
        }
    };

    let name = input.name.clone();
    let created = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(artists::create_artist(txn, input).await?) })
    })
    .await;

    match created {
        Ok(artist) => {
            info!(artist_id = artist.id, "artist listed");
            flash::push(&session, flash::listed(KIND, &name));
        }
        Err(e) => {
            error!(error = %e, "artist could not be listed");
            flash::push(&session, flash::not_listed(KIND, &name));
        }
    }

    views::render(&HomePage {
        flashes: flash::take(&session),
    })
}

/// GET /artists/{id}/edit
async fn edit_form(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let artist = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(artists::require_artist(txn, id).await?) })
    })
    .await?;

    views::render(&EditArtistPage::new(
        flash::take(&session),
        id,
        ArtistForm::from_artist(&artist),
        Vec::new(),
    ))
}

/// POST /artists/{id}/edit
async fn edit_submit(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = match ArtistForm::bind(&fields) {
        Ok(input) => input,
        Err(errors) => {
            flash::push(&session, flash::not_updated(KIND, &fields.text("name")));
            return views::render(&EditArtistPage::new(
                flash::take(&session),
                id,
                ArtistForm::from_fields(&fields),
                errors.messages(),
            ));
        }
    };

    let name = input.name.clone();
    let updated = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(artists::update_artist(txn, id, input).await?) })
    })
    .await;

    match updated {
        Ok(_) => flash::push(&session, flash::updated(KIND, &name)),
        Err(e) if e.is_not_found() => return Err(e),
        Err(e) => {
            error!(artist_id = id, error = %e, "artist could not be updated");
            flash::push(&session, flash::not_updated(KIND, &name));
        }
    }

    Ok(see_other(format!("/artists/{id}")))
}

/// GET /artists/{id}/delete
async fn delete(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let deleted = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(artists::delete_artist(txn, id).await?) })
    })
    .await;

    match deleted {
        Ok(artist) => {
            info!(artist_id = id, "artist deleted");
            flash::push(&session, flash::deleted(KIND, &artist.name));
        }
        Err(e) => {
            error!(artist_id = id, error = %e, "artist could not be deleted");
            flash::push(&session, flash::not_deleted(KIND));
        }
    }

    Ok(see_other("/"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/artists", web::get().to(index))
        .route("/artists/search", web::post().to(search))
        .service(
            web::resource("/artists/create")
                .route(web::get().to(create_form))
                .route(web::post().to(create_submit)),
        )
        .route("/artists/{id:\\d+}", web::get().to(detail))
        .service(
            web::resource("/artists/{id:\\d+}/edit")
                .route(web::get().to(edit_form))
                .route(web::post().to(edit_submit)),
        )
        .route("/artists/{id:\\d+}/delete", web::get().to(delete));
}
