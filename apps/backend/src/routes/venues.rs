//! Venue pages: listing by area, search, detail, create, edit and delete.

use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{error, info};

use super::see_other;
use crate::db::txn::with_txn;
use crate::domain::now_utc;
use crate::error::AppError;
use crate::flash;
use crate::forms::{FormFields, VenueForm};
use crate::repos::venues;
use crate::state::AppState;
use crate::views::{
    self, EditVenuePage, HomePage, NewVenuePage, SearchVenuesPage, VenueDetailPage, VenuesPage,
};

const KIND: &str = "Venue";

/// GET /venues
async fn index(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let areas = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(venues::list_areas(txn).await?) })
    })
    .await?;

    views::render(&VenuesPage {
        flashes: flash::take(&session),
        areas,
    })
}

/// POST /venues/search
async fn search(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let search_term = fields.text("search_term");
    let term = search_term.clone();
    let results = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(venues::search(txn, &term).await?) })
    })
    .await?;

    views::render(&SearchVenuesPage {
        flashes: flash::take(&session),
        search_term,
        count: results.len(),
        results,
    })
}

/// GET /venues/{id}
async fn detail(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let now = now_utc();
    let detail = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(venues::find_detail(txn, id, now).await?) })
    })
    .await?;

    views::render(&VenueDetailPage::new(flash::take(&session), detail))
}

/// GET /venues/create
async fn create_form(session: Session) -> Result<HttpResponse, AppError> {
    views::render(&NewVenuePage::new(
        flash::take(&session),
        VenueForm::default(),
        Vec::new(),
    ))
}

/// POST /venues/create
async fn create_submit(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let input = match VenueForm::bind(&fields) {
        Ok(input) => input,
        Err(errors) => {
            flash::push(&session, flash::not_listed(KIND, &fields.text("name")));
            return views::render(&NewVenuePage::new(
                flash::take(&session),
                VenueForm::from_fields(&fields),
                errors.messages(),
            ));
        }
    };

    let name = input.name.clone();
    let created = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(venues::create_venue(txn, input).await?) })
    })
    .await;

    match created {
        Ok(venue) => {
            info!(venue_id = venue.id, "venue listed");
            flash::push(&session, flash::listed(KIND, &name));
        }
        Err(e) => {
            error!(error = %e, "venue could not be listed");
            flash::push(&session, flash::not_listed(KIND, &name));
        }
    }

    views::render(&HomePage {
        flashes: flash::take(&session),
    })
}

/// GET /venues/{id}/edit
async fn edit_form(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let venue = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(venues::require_venue(txn, id).await?) })
    })
    .await?;

    views::render(&EditVenuePage::new(
        flash::take(&session),
        id,
        VenueForm::from_venue(&venue),
        Vec::new(),
    ))
}

/// POST /venues/{id}/edit
async fn edit_submit(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = match VenueForm::bind(&fields) {
        Ok(input) => input,
        Err(errors) => {
            flash::push(&session, flash::not_updated(KIND, &fields.text("name")));
            return views::render(&EditVenuePage::new(
                flash::take(&session),
                id,
                VenueForm::from_fields(&fields),
                errors.messages(),
            ));
        }
    };

    let name = input.name.clone();
    let updated = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(venues::update_venue(txn, id, input).await?) })
    })
    .await;

    match updated {
        Ok(_) => flash::push(&session, flash::updated(KIND, &name)),
        Err(e) if e.is_not_found() => return Err(e),
        Err(e) => {
            error!(venue_id = id, error = %e, "venue could not be updated");
            flash::push(&session, flash::not_updated(KIND, &name));
        }
    }

    Ok(see_other(format!("/venues/{id}")))
}

/// GET /venues/{id}/delete
async fn delete(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let deleted = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(venues::delete_venue(txn, id).await?) })
    })
    .await;

    match deleted {
        Ok(venue) => {
            info!(venue_id = id, "venue deleted");
            flash::push(&session, flash::deleted(KIND, &venue.name));
        }
        Err(e) => {
            error!(venue_id = id, error = %e, "venue could not be deleted");
            flash::push(&session, flash::not_deleted(KIND));
        }
    }

    Ok(see_other("/"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/venues", web::get().to(index))
        .route("/venues/search", web::post().to(search))
        .service(
            web::resource("/venues/create")
                .route(web::get().to(create_form))
                .route(web::post().to(create_submit)),
        )
        .route("/venues/{id:\\d+}", web::get().to(detail))
        .service(
            web::resource("/venues/{id:\\d+}/edit")
                .route(web::get().to(edit_form))
                .route(web::post().to(edit_submit)),
        )
        .route("/venues/{id:\\d+}/delete", web::get().to(delete));
}
