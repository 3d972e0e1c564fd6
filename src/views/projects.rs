use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::forms::{CLIENT_REQUIRED, ProjectForm};
use crate::models::project::{ProjectFields, total_time};
use crate::models::{Client, Project, ProjectOverview, Task};
use crate::state::SharedState;
use crate::views::{GENERIC_ERROR, RecordId, SAVED, hours, money, render};

pub const PROJECT_DELETED: &str = "Projet supprimé avec succès.";

/// A project as shown in listings, with its derived totals pre-formatted.
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub client_name: String,
    pub status: String,
    pub hourly_rate: String,
    pub total_time: String,
    pub total_cost: String,
}

impl From<&ProjectOverview> for ProjectRow {
    fn from(p: &ProjectOverview) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            client_name: p.client_name.clone(),
            status: p.status.clone(),
            hourly_rate: money(p.hourly_rate),
            total_time: hours(p.total_time),
            total_cost: money(p.total_cost()),
        }
    }
}

pub struct ClientOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

fn client_options(clients: &[Client], selected: Option<i64>) -> Vec<ClientOption> {
    clients
        .iter()
        .map(|c| ClientOption {
            id: c.id,
            label: if c.enterprise.is_empty() {
                format!("{} {}", c.lastname, c.firstname)
            } else {
                format!("{} {} ({})", c.lastname, c.firstname, c.enterprise)
            },
            selected: Some(c.id) == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "dashboard/projects.html")]
struct ProjectsTemplate {
    user_name: String,
    flash: Option<Flash>,
    projects: Vec<ProjectRow>,
}

#[derive(Template)]
#[template(path = "dashboard/add_project.html")]
struct AddProjectTemplate {
    user_name: String,
    flash: Option<Flash>,
    clients: Vec<ClientOption>,
}

#[derive(Template)]
#[template(path = "dashboard/view_project.html")]
struct ViewProjectTemplate {
    user_name: String,
    flash: Option<Flash>,
    project: Project,
    client_name: String,
    hourly_rate: String,
    tasks: Vec<Task>,
    total_time: String,
    total_cost: String,
}

#[derive(Template)]
#[template(path = "dashboard/edit_project.html")]
struct EditProjectTemplate {
    user_name: String,
    flash: Option<Flash>,
    project: Project,
    clients: Vec<ClientOption>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let projects = db::projects::list(&state.pool, auth.user_id)
        .await?
        .iter()
        .map(ProjectRow::from)
        .collect();

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        ProjectsTemplate {
            user_name: auth.display_name,
            flash,
            projects,
        },
    )
}

pub async fn new_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let clients = db::clients::list(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        AddProjectTemplate {
            user_name: auth.display_name,
            flash,
            clients: client_options(&clients, None),
        },
    )
}

/// The client picked in the form must be one of the user's own.
async fn owns_client(
    state: &SharedState,
    auth: &AuthUser,
    fields: &ProjectFields,
) -> Result<bool, AppError> {
    Ok(db::clients::find_by_id(&state.pool, fields.client_id, auth.user_id)
        .await?
        .is_some())
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    Form(form): Form<ProjectForm>,
) -> Result<Response, AppError> {
    let fields = match form.validate_new() {
        Ok(fields) => fields,
        Err(message) => return Ok(flashes.redirect("/add-a-project", Flash::error(message))),
    };

    if !owns_client(&state, &auth, &fields).await? {
        return Ok(flashes.redirect("/add-a-project", Flash::error(CLIENT_REQUIRED)));
    }

    let project = db::projects::create(&state.pool, auth.user_id, &fields).await?;
    tracing::debug!("User {} created project {}", auth.user_id, project.id);

    Ok(Redirect::to("/projects").into_response())
}

pub async fn show(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let Some(project) = db::projects::find_by_id(&state.pool, id, auth.user_id).await? else {
        return Ok(flashes.redirect("/projects", Flash::error(GENERIC_ERROR)));
    };

    let tasks = db::tasks::list_by_project(&state.pool, project.id, auth.user_id).await?;
    let client_name = db::clients::find_by_id(&state.pool, project.client_id, auth.user_id)
        .await?
        .map(|c| format!("{} {}", c.lastname, c.firstname))
        .unwrap_or_default();

    let time = total_time(&tasks);
    let (flashes, flash) = flashes.take();
    render(
        flashes,
        ViewProjectTemplate {
            user_name: auth.display_name,
            flash,
            client_name,
            hourly_rate: money(project.hourly_rate),
            total_time: hours(time),
            total_cost: money(project.total_cost(time)),
            project,
            tasks,
        },
    )
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let Some(project) = db::projects::find_by_id(&state.pool, id, auth.user_id).await? else {
        return Ok(flashes.redirect("/projects", Flash::error(GENERIC_ERROR)));
    };
    let clients = db::clients::list(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        EditProjectTemplate {
            user_name: auth.display_name,
            flash,
            clients: client_options(&clients, Some(project.client_id)),
            project,
        },
    )
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
    Form(form): Form<ProjectForm>,
) -> Result<Response, AppError> {
    let back = format!("/edit-project/{id}");

    let fields = match form.validate_edit() {
        Ok(fields) => fields,
        Err(message) => return Ok(flashes.redirect(&back, Flash::error(message))),
    };

    if !owns_client(&state, &auth, &fields).await? {
        return Ok(flashes.redirect(&back, Flash::error(CLIENT_REQUIRED)));
    }

    match db::projects::update(&state.pool, id, auth.user_id, &fields).await? {
        Some(_) => Ok(flashes.redirect(&back, Flash::success(SAVED))),
        None => Ok(flashes.redirect("/projects", Flash::error(GENERIC_ERROR))),
    }
}

pub async fn back_to_list(_auth: AuthUser) -> Redirect {
    Redirect::to("/projects")
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let flash = if db::projects::delete(&state.pool, id, auth.user_id).await? {
        Flash::success(PROJECT_DELETED)
    } else {
        Flash::error(GENERIC_ERROR)
    };

    Ok(flashes.redirect("/projects", flash))
}
