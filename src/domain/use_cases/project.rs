use tracing::error;
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project in ascending `order`
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut projects = self.project_repo.list_projects().await.map_err(|e| {
            error!("Failed to fetch projects: {}", e);
            AppError::InternalError("Failed to fetch projects".to_string())
        })?;

        // Listing order is part of the API contract, whatever the backend returns
        projects.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));

        Ok(projects)
    }

    /// Stores a new project and returns it with its generated id
    pub async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let project = project.normalized();
        project.validate()?;

        self.project_repo.create_project(&project).await.map_err(|e| {
            error!("Failed to create project: {}", e);
            AppError::InternalError("Failed to create project".to_string())
        })
    }
}
