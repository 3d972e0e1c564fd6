use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::forms::{PROJECT_REQUIRED, TaskForm};
use crate::models::{Project, Task, TaskWithProject};
use crate::state::SharedState;
use crate::views::{GENERIC_ERROR, RecordId, SAVED, render};

pub const TASK_DELETED: &str = "Tâche supprimée avec succès.";

#[derive(Template)]
#[template(path = "dashboard/tasks.html")]
struct TasksTemplate {
    user_name: String,
    flash: Option<Flash>,
    tasks: Vec<TaskWithProject>,
}

#[derive(Template)]
#[template(path = "dashboard/add_task.html")]
struct AddTaskTemplate {
    user_name: String,
    flash: Option<Flash>,
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "dashboard/edit_task.html")]
struct EditTaskTemplate {
    user_name: String,
    flash: Option<Flash>,
    task: Task,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let tasks = db::tasks::list(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        TasksTemplate {
            user_name: auth.display_name,
            flash,
            tasks,
        },
    )
}

pub async fn new_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let projects = db::projects::list_names(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        AddTaskTemplate {
            user_name: auth.display_name,
            flash,
            projects,
        },
    )
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    Form(form): Form<TaskForm>,
) -> Result<Response, AppError> {
    let task = match form.validate_new() {
        Ok(task) => task,
        Err(message) => return Ok(flashes.redirect("/add-a-task", Flash::error(message))),
    };

    let owned = db::projects::find_by_id(&state.pool, task.project_id, auth.user_id)
        .await?
        .is_some();
    if !owned {
        return Ok(flashes.redirect("/add-a-task", Flash::error(PROJECT_REQUIRED)));
    }

    let created = db::tasks::create(&state.pool, &task).await?;
    tracing::debug!("User {} created task {}", auth.user_id, created.id);

    Ok(Redirect::to("/tasks").into_response())
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let Some(task) = db::tasks::find_by_id(&state.pool, id, auth.user_id).await? else {
        return Ok(flashes.redirect("/tasks", Flash::error(GENERIC_ERROR)));
    };

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        EditTaskTemplate {
            user_name: auth.display_name,
            flash,
            task,
        },
    )
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
    Form(form): Form<TaskForm>,
) -> Result<Response, AppError> {
    let changes = match form.validate_edit() {
        Ok(changes) => changes,
        Err(message) => {
            return Ok(flashes.redirect(&format!("/edit-task/{id}"), Flash::error(message)));
        }
    };

    match db::tasks::update(&state.pool, id, auth.user_id, &changes).await? {
        Some(_) => Ok(flashes.redirect("/tasks", Flash::success(SAVED))),
        None => Ok(flashes.redirect("/tasks", Flash::error(GENERIC_ERROR))),
    }
}

pub async fn back_to_list(_auth: AuthUser) -> Redirect {
    Redirect::to("/tasks")
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
    RecordId(id): RecordId,
) -> Result<Response, AppError> {
    let flash = if db::tasks::delete(&state.pool, id, auth.user_id).await? {
        Flash::success(TASK_DELETED)
    } else {
        Flash::error(GENERIC_ERROR)
    };

    Ok(flashes.redirect("/tasks", flash))
}
