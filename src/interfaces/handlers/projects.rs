use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::NewProject, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

/// Operator endpoint. No authentication is enforced.
#[instrument(skip(state, data), fields(title = %data.title))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler
        .create_project(data.into_inner())
        .await?;

    tracing::info!(project_id = %project.id, "Project created");
    Ok(HttpResponse::Created().json(project))
}
