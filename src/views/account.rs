use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::extractor::AuthUser;
use crate::auth::session;
use crate::db;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::forms::ProfileForm;
use crate::models::User;
use crate::state::SharedState;
use crate::views::auth::DUPLICATE_ACCOUNT;
use crate::views::{GENERIC_ERROR, SAVED, render};

pub const ACCOUNT_DELETED: &str = "Compte supprimé avec succès.";

#[derive(Template)]
#[template(path = "dashboard/profile.html")]
struct ProfileTemplate {
    user_name: String,
    flash: Option<Flash>,
    user: User,
}

pub async fn profile_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        ProfileTemplate {
            user_name: auth.display_name,
            flash,
            user,
        },
    )
}

pub async fn update_profile(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let identity = match form.validate() {
        Ok(identity) => identity,
        Err(message) => return Ok(flashes.redirect("/profile", Flash::error(message))),
    };

    let updated = db::users::update_profile(
        &state.pool,
        auth.user_id,
        &identity.lastname,
        &identity.firstname,
        &identity.email,
    )
    .await;

    match updated {
        Ok(_) => Ok(flashes.redirect("/profile", Flash::success(SAVED))),
        Err(e) if db::is_unique_violation(&e) => {
            Ok(flashes.redirect("/profile", Flash::error(DUPLICATE_ACCOUNT)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletion only happens on POST; a plain visit goes back to the profile.
pub async fn delete_account_page(_auth: AuthUser) -> Redirect {
    Redirect::to("/profile")
}

pub async fn delete_account(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let flash = if db::users::delete(&state.pool, auth.user_id).await? {
        tracing::info!("User {} deleted their account", auth.user_id);
        Flash::success(ACCOUNT_DELETED)
    } else {
        Flash::error(GENERIC_ERROR)
    };

    Ok((session::clear(jar), flashes.push(flash), Redirect::to("/")).into_response())
}
