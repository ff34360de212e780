use tracing::{info, warn};

use crate::{client::PortfolioApi, entities::project::Project};

/// Splits projects into (featured, archive) by `isFeatured` alone, keeping
/// the fetched order on both sides.
pub fn partition_projects(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.is_featured)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

/// Project grid state: one fetch, featured always shown, archive on demand.
#[derive(Debug)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    state: LoadState,
    show_archive: bool,
}

impl Default for ProjectGallery {
    fn default() -> Self {
        ProjectGallery::new()
    }
}

impl ProjectGallery {
    pub fn new() -> Self {
        ProjectGallery {
            projects: Vec::new(),
            state: LoadState::Loading,
            show_archive: false,
        }
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        ProjectGallery {
            projects,
            state: LoadState::Loaded,
            show_archive: false,
        }
    }

    /// Fetches the list once. A failed fetch leaves the gallery empty and is
    /// only logged; there is no retry.
    pub async fn load(&mut self, api: &PortfolioApi) {
        if self.state == LoadState::Loaded {
            return;
        }

        match api.fetch_projects().await {
            Ok(projects) => {
                info!(count = projects.len(), "Projects loaded");
                self.projects = projects;
            }
            Err(e) => {
                warn!("Error fetching projects: {}", e);
                self.projects.clear();
            }
        }

        self.state = LoadState::Loaded;
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn featured(&self) -> Vec<&Project> {
        partition_projects(&self.projects).0
    }

    pub fn archive(&self) -> Vec<&Project> {
        partition_projects(&self.projects).1
    }

    pub fn show_archive(&self) -> bool {
        self.show_archive
    }

    /// Flips archive visibility and returns the new value.
    pub fn toggle_archive(&mut self) -> bool {
        self.show_archive = !self.show_archive;
        self.show_archive
    }

    /// What the grid renders right now.
    pub fn visible(&self) -> Vec<&Project> {
        let (mut featured, archive) = partition_projects(&self.projects);
        if self.show_archive {
            featured.extend(archive);
        }
        featured
    }
}
