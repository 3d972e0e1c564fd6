pub mod account;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod projects;
pub mod tasks;

use askama::Template;
use axum::Router;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::state::SharedState;

/// Shown when a record is missing, belongs to another user, or could not be deleted.
pub const GENERIC_ERROR: &str = "Une erreur s'est produite. Veuillez réessayer s'il-vous-plaît.";
pub const SAVED: &str = "Les modifications ont bien été sauvegardées.";

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Authentication & account
        .route("/", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
        .route(
            "/reinitialisation-password",
            get(auth::reset_password_page).post(auth::reset_password),
        )
        .route(
            "/profile",
            get(account::profile_page).post(account::update_profile),
        )
        .route(
            "/delete-account",
            get(account::delete_account_page).post(account::delete_account),
        )
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        // Clients
        .route("/clients", get(clients::list))
        .route("/add-a-client", get(clients::new_page).post(clients::create))
        .route("/view-client/{id}", get(clients::show).post(clients::show))
        .route(
            "/edit-client/{id}",
            get(clients::edit_page).post(clients::update),
        )
        .route(
            "/delete-client/{id}",
            get(clients::back_to_list).post(clients::delete),
        )
        // Projects
        .route("/projects", get(projects::list))
        .route(
            "/add-a-project",
            get(projects::new_page).post(projects::create),
        )
        .route("/view-project/{id}", get(projects::show).post(projects::show))
        .route(
            "/edit-project/{id}",
            get(projects::edit_page).post(projects::update),
        )
        .route(
            "/delete-project/{id}",
            get(projects::back_to_list).post(projects::delete),
        )
        // Tasks
        .route("/tasks", get(tasks::list))
        .route("/add-a-task", get(tasks::new_page).post(tasks::create))
        .route("/edit-task/{id}", get(tasks::edit_page).post(tasks::update))
        .route(
            "/delete-task/{id}",
            get(tasks::back_to_list).post(tasks::delete),
        )
}

/// Id of the client, project or task named in the path. An id that does not
/// parse is handled like a missing record: generic error flash, then back to
/// the listing.
pub struct RecordId(pub i64);

impl FromRequestParts<SharedState> for RecordId {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(RecordId(id)),
            Err(rejection) => {
                tracing::debug!("Rejected record id in {}: {rejection}", parts.uri.path());
                let Ok(flashes) = FlashJar::from_request_parts(parts, state).await;
                Err(flashes.redirect(listing_for(parts.uri.path()), Flash::error(GENERIC_ERROR)))
            }
        }
    }
}

fn listing_for(path: &str) -> &'static str {
    let action = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    if action.ends_with("-client") {
        "/clients"
    } else if action.ends_with("-project") {
        "/projects"
    } else if action.ends_with("-task") {
        "/tasks"
    } else {
        "/dashboard"
    }
}

/// Render `template` and attach the flash jar so a consumed flash is cleared.
pub(crate) fn render<T: Template>(flashes: FlashJar, template: T) -> Result<Response, AppError> {
    let html = template.render()?;
    Ok((flashes, Html(html)).into_response())
}

pub(crate) fn hours(value: f64) -> String {
    format!("{value:.2}")
}

pub(crate) fn money(value: f64) -> String {
    format!("{value:.2} €")
}
