use askama::Template;
use axum::extract::State;
use axum::response::Response;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::dashboard::DashboardCounts;
use crate::error::AppError;
use crate::flash::{Flash, FlashJar};
use crate::state::SharedState;
use crate::views::render;

#[derive(Template)]
#[template(path = "dashboard/dashboard.html")]
struct DashboardTemplate {
    user_name: String,
    flash: Option<Flash>,
    counts: DashboardCounts,
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
    flashes: FlashJar,
) -> Result<Response, AppError> {
    let counts = db::dashboard::counts(&state.pool, auth.user_id).await?;

    let (flashes, flash) = flashes.take();
    render(
        flashes,
        DashboardTemplate {
            user_name: auth.display_name,
            flash,
            counts,
        },
    )
}
