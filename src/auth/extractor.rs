use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use chrono::Utc;

use crate::auth::session::{self, COOKIE_NAME};
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// The authenticated user behind the request's session cookie. Every
/// query on owned data takes `user_id` from here.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub session_id: i64,
    pub display_name: String,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(COOKIE_NAME)
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::Unauthorized("Missing session cookie".to_string()))?;

        let stored = db::sessions::find_with_user(&state.pool, &session::hash_token(&token))
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown session".to_string()))?;

        if stored.expires_at < Utc::now() {
            db::sessions::delete(&state.pool, stored.session_id).await?;
            return Err(AppError::Unauthorized("Session expired".to_string()));
        }

        Ok(AuthUser {
            user_id: stored.user_id,
            session_id: stored.session_id,
            display_name: format!("{} {}", stored.firstname, stored.lastname),
        })
    }
}

/// `Option<AuthUser>` for public pages that only behave differently when
/// someone is already logged in.
impl OptionalFromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <AuthUser as FromRequestParts<SharedState>>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::Unauthorized(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
