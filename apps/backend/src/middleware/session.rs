use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;

use crate::config::app::MIN_SESSION_KEY_LEN;
use crate::error::AppError;

/// Signing key from configured bytes, or a fresh random key.
pub fn session_key(configured: Option<&[u8]>) -> Result<Key, AppError> {
    match configured {
        Some(bytes) => Key::try_from(bytes).map_err(|_| {
            AppError::config(format!(
                "session key must be at least {MIN_SESSION_KEY_LEN} bytes"
            ))
        }),
        None => Ok(Key::generate()),
    }
}

/// Cookie-backed session used for flash messages. `secure` comes from
/// `SHOWBOOK_SECURE_COOKIES`.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("showbook_session".to_string())
        .cookie_secure(secure)
        .cookie_content_security(CookieContentSecurity::Signed)
        .build()
}

#[cfg(test)]
mod tests {
    use actix_session::Session;
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::flash;

    #[::core::prelude::v1::test]
    fn short_keys_are_rejected() {
        assert!(session_key(Some(b"too short".as_slice())).is_err());
        assert!(session_key(Some([7u8; 64].as_slice())).is_ok());
        assert!(session_key(None).is_ok());
    }

    #[actix_web::test]
    async fn secure_attribute_follows_setting() {
        for secure in [false, true] {
            let app = test::init_service(
                App::new()
                    .wrap(session_middleware(Key::from(&[7u8; 64][..]), secure))
                    .route(
                        "/",
                        web::get().to(|session: Session| async move {
                            flash::push(&session, "Venue Blue Note was successfully updated!");
                            HttpResponse::Ok().finish()
                        }),
                    ),
            )
            .await;

            let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
            let cookie = resp
                .response()
                .cookies()
                .find(|c| c.name() == "showbook_session")
                .expect("session cookie");
            assert_eq!(cookie.secure().unwrap_or(false), secure);
        }
    }
}
