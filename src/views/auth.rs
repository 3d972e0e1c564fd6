use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::auth::extractor::AuthUser;
use crate::auth::{password, session};
use crate::db;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::forms::{AccountForm, LoginForm};
use crate::state::SharedState;
use crate::views::render;

pub const UNKNOWN_EMAIL: &str = "Cet email est inconnu.";
pub const WRONG_PASSWORD: &str = "Mot de passe incorrect";
pub const DUPLICATE_ACCOUNT: &str =
    "Un compte existe déjà avec cette adresse email. Connectez-vous!";
pub const PASSWORD_CHANGED: &str = "Le mot de passe a bien été modifié.";
pub const IDENTITY_MISMATCH: &str = "Aucun compte ne correspond à ces informations.";

#[derive(Template)]
#[template(path = "index.html")]
struct LoginTemplate {
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "reinitialisation_password.html")]
struct ResetPasswordTemplate {
    flash: Option<Flash>,
}

pub async fn login_page(auth: Option<AuthUser>, flashes: FlashJar) -> Result<Response, AppError> {
    if auth.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    let (flashes, flash) = flashes.take();
    render(flashes, LoginTemplate { flash })
}

pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    flashes: FlashJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let creds = match form.validate() {
        Ok(creds) => creds,
        Err(message) => return Ok(flashes.redirect("/", Flash::error(message))),
    };

    let Some(user) = db::users::find_by_email(&state.pool, &creds.email).await? else {
        tracing::warn!("Login attempt for unknown email");
        return Ok(flashes.redirect("/", Flash::error(UNKNOWN_EMAIL)));
    };

    let valid = password::verify(&creds.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        tracing::warn!("Failed login for user {}", user.id);
        return Ok(flashes.redirect("/", Flash::error(WRONG_PASSWORD)));
    }

    let jar = session::start(&state.pool, &state.config, jar, user.id).await?;
    tracing::info!("User {} logged in", user.id);

    Ok((jar, Redirect::to("/dashboard")).into_response())
}

pub async fn logout(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    db::sessions::delete(&state.pool, auth.session_id).await?;
    tracing::info!("User {} logged out", auth.user_id);

    Ok((session::clear(jar), Redirect::to("/")).into_response())
}

pub async fn register_page(flashes: FlashJar) -> Result<Response, AppError> {
    let (flashes, flash) = flashes.take();
    render(flashes, RegisterTemplate { flash })
}

pub async fn register(
    State(state): State<SharedState>,
    jar: CookieJar,
    flashes: FlashJar,
    Form(form): Form<AccountForm>,
) -> Result<Response, AppError> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(message) => return Ok(flashes.redirect("/register", Flash::error(message))),
    };
    let identity = &fields.identity;

    let pw_hash = password::hash(&fields.password).map_err(AppError::Internal)?;

    let mut tx = state.pool.begin().await?;

    if db::users::find_by_email(&mut *tx, &identity.email).await?.is_some() {
        return Ok(flashes.redirect("/register", Flash::error(DUPLICATE_ACCOUNT)));
    }

    let created = db::users::create(
        &mut *tx,
        &identity.lastname,
        &identity.firstname,
        &identity.email,
        &pw_hash,
    )
    .await;

    let user = match created {
        Ok(user) => user,
        // Lost a race against a concurrent registration of the same email.
        Err(e) if db::is_unique_violation(&e) => {
            return Ok(flashes.redirect("/register", Flash::error(DUPLICATE_ACCOUNT)));
        }
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;
    tracing::info!("User {} registered", user.id);

    state
        .notifier()
        .welcome(&user.email, &user.firstname, &user.lastname, &state.config.base_url)
        .await;

    let jar = session::start(&state.pool, &state.config, jar, user.id).await?;
    Ok((jar, Redirect::to("/dashboard")).into_response())
}

pub async fn reset_password_page(flashes: FlashJar) -> Result<Response, AppError> {
    let (flashes, flash) = flashes.take();
    render(flashes, ResetPasswordTemplate { flash })
}

pub async fn reset_password(
    State(state): State<SharedState>,
    jar: CookieJar,
    flashes: FlashJar,
    Form(form): Form<AccountForm>,
) -> Result<Response, AppError> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(message) => {
            return Ok(flashes.redirect("/reinitialisation-password", Flash::error(message)));
        }
    };
    let identity = &fields.identity;

    let user = db::users::find_by_identity(
        &state.pool,
        &identity.lastname,
        &identity.firstname,
        &identity.email,
    )
    .await?;

    let Some(user) = user else {
        tracing::warn!("Password reset with non-matching identity");
        return Ok(flashes.redirect(
            "/reinitialisation-password",
            Flash::error(IDENTITY_MISMATCH),
        ));
    };

    let pw_hash = password::hash(&fields.password).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, user.id, &pw_hash).await?;
    // Revoke all existing sessions
    db::sessions::delete_all_for_user(&state.pool, user.id).await?;
    tracing::info!("Password reset for user {}", user.id);

    state
        .notifier()
        .password_changed(&user.email, &user.firstname, &user.lastname)
        .await;

    let jar = session::start(&state.pool, &state.config, jar, user.id).await?;
    let flashes = flashes.push(Flash::success(PASSWORD_CHANGED));
    Ok((jar, flashes, Redirect::to("/dashboard")).into_response())
}
