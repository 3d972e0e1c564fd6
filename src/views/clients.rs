use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::forms::ClientForm;
use crate::models::Client;
use crate::state::SharedState;
use crate::views::projects::ProjectRow;
use crate::views::{GENERIC_ERROR, RecordId, SAVED, render};

pub const CLIENT_DELETED: &str = "Client supprimé avec succès.";

#[derive(Template)]
#[template(path = "dashboard/clients.html")]
struct ClientsTemplate {
    user_name: String,
    flash: Option<Flash>,
    clients: Vec<Client>,
}

#[derive(Template)]
#[template(path = "dashboard/add_client.html")]
struct AddClientTemplate {
    user_name: String,
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "dashboard/view_client.html")]
struct ViewClientTemplate {
    user_name: String,
    flash: Option<Flash>,
    client: Client,
    projects: Vec<ProjectRow>,
}

#[derive(Template)]
#[template(path = "dashboard/edit_client.html")]
struct EditClientTemplate {
    user_name: String,
    flash: Option<Flash>,
    client: Client,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let clients = db::clients::list(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        ClientsTemplate {
            user_name: auth.display_name,
            flash,
            clients,
        },
    )
}

pub async fn new_page(auth: AuthUser, flashes: FlashJar) -> Result<Response, AppError> {
    let (flashes, flash) = flashes.take();
    render(
        flashes,
        AddClientTemplate {
            user_name: auth.display_name,
            flash,
        },
    )
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    Form(form): Form<ClientForm>,
) -> Result<Response, AppError> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(message) => return Ok(flashes.redirect("/add-a-client", Flash::error(message))),
    };

    let client = db::clients::create(&state.pool, auth.user_id, &fields).await?;
    tracing::debug!("User {} created client {}", auth.user_id, client.id);

    Ok(Redirect::to("/clients").into_response())
}

pub async fn show(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let Some(client) = db::clients::find_by_id(&state.pool, id, auth.user_id).await? else {
        return Ok(flashes.redirect("/clients", Flash::error(GENERIC_ERROR)));
    };

    let projects = db::projects::list_by_client(&state.pool, client.id, auth.user_id)
        .await?
        .iter()
        .map(ProjectRow::from)
        .collect();

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        ViewClientTemplate {
            user_name: auth.display_name,
            flash,
            client,
            projects,
        },
    )
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let Some(client) = db::clients::find_by_id(&state.pool, id, auth.user_id).await? else {
        return Ok(flashes.redirect("/clients", Flash::error(GENERIC_ERROR)));
    };

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        EditClientTemplate {
            user_name: auth.display_name,
            flash,
            client,
        },
    )
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
    Form(form): Form<ClientForm>,
) -> Result<Response, AppError> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(message) => {
            return Ok(flashes.redirect(&format!("/edit-client/{id}"), Flash::error(message)));
        }
    };

    match db::clients::update(&state.pool, id, auth.user_id, &fields).await? {
        Some(_) => Ok(flashes.redirect("/clients", Flash::success(SAVED))),
        None => Ok(flashes.redirect("/clients", Flash::error(GENERIC_ERROR))),
    }
}

pub async fn back_to_list(_auth: AuthUser) -> Redirect {
    Redirect::to("/clients")
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let flash = if db::clients::delete(&state.pool, id, auth.user_id).await? {
        Flash::success(CLIENT_DELETED)
    } else {
        Flash::error(GENERIC_ERROR)
    };

    Ok(flashes.redirect("/clients", flash))
}
