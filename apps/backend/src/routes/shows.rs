use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{error, info};

use crate::db::txn::with_txn;
use crate::domain::now_utc;
use crate::error::AppError;
use crate::flash;
use crate::forms::{FormFields, ShowForm};
use crate::repos::shows;
use crate::state::AppState;
use crate::views::{self, HomePage, NewShowPage, ShowRow, ShowsPage};

/// GET /shows
async fn index(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let listings = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { Ok(shows::list_shows(txn).await?) })
    })
    .await?;

    views::render(&ShowsPage {
        flashes: flash::take(&session),
        shows: listings.into_iter().map(ShowRow::from).collect(),
    })
}

/// GET /shows/create
async fn create_form(session: Session) -> Result<HttpResponse, AppError> {
    views::render(&NewShowPage {
        flashes: flash::take(&session),
        form: ShowForm::starting_at(now_utc()),
        errors: Vec::new(),
    })
}

/// POST /shows/create
async fn create_submit(
    req: HttpRequest,
    session: Session,
    state: web::Data<AppState>,
    fields: FormFields,
) -> Result<HttpResponse, AppError> {
    let new_show = match ShowForm::bind(&fields) {
        Ok(new_show) => new_show,
        Err(errors) => {
            flash::push(&session, flash::SHOW_NOT_LISTED);
            return views::render(&NewShowPage {
                flashes: flash::take(&session),
                form: ShowForm::from_fields(&fields),
                errors: errors.messages(),
            });
        }
    };

    let created = with_txn(Some(&req), &state, move |txn| {
        Box::pin(async move { Ok(shows::create_show(txn, new_show).await?) })
    })
    .await;

    match created {
        Ok(show) => {
            info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "show listed"
            );
            flash::push(&session, flash::SHOW_LISTED);
        }
        Err(e) => {
            error!(error = %e, "show could not be listed");
            flash::push(&session, flash::SHOW_NOT_LISTED);
        }
    }

    views::render(&HomePage {
        flashes: flash::take(&session),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/shows", web::get().to(index)).service(
        web::resource("/shows/create")
            .route(web::get().to(create_form))
            .route(web::post().to(create_submit)),
    );
}
