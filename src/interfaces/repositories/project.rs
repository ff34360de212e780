use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, ascending by `order`.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
}

#[async_trait]
impl<T: ProjectRepository + ?Sized> ProjectRepository for Arc<T> {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        (**self).list_projects().await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        (**self).create_project(project).await
    }
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, tech_stack, image_url, github_url, live_url,
                   is_featured, is_live, sort_order, created_at
            FROM projects
            ORDER BY sort_order ASC, created_at ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, tech_stack, image_url, github_url, live_url,
                is_featured, is_live, sort_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, tech_stack, image_url, github_url, live_url,
                      is_featured, is_live, sort_order, created_at
            "#
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.is_featured)
        .bind(project.is_live)
        .bind(project.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
