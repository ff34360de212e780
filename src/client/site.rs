use std::fmt;

use crate::{
    client::{
        contact_form::{ContactFormState, SubmissionStatus},
        gallery::ProjectGallery,
        health_monitor::HealthMonitor,
        preferences::{PreferenceStore, Preferences, Theme},
        profile::PROFILE,
        ClientConfig, ClientError, PortfolioApi,
    },
    entities::{health::HealthReport, project::Project},
};

/// Application root. Owns every piece of client state and passes it down
/// explicitly.
pub struct PortfolioSite {
    api: PortfolioApi,
    store: PreferenceStore,
    preferences: Preferences,
    pub gallery: ProjectGallery,
    pub contact: ContactFormState,
    health: HealthMonitor,
}

impl PortfolioSite {
    /// Hydrates preferences, starts health polling and loads the gallery.
    pub async fn bootstrap(config: ClientConfig) -> Result<Self, ClientError> {
        let api = PortfolioApi::new(&config.api_base_url)?;
        let store = PreferenceStore::new(&config.preferences_path);
        let preferences = store.load();

        let health = HealthMonitor::spawn(api.clone(), config.health_poll_interval);

        let mut gallery = ProjectGallery::new();
        gallery.load(&api).await;

        Ok(PortfolioSite {
            api,
            store,
            preferences,
            gallery,
            contact: ContactFormState::new(config.contact_reset_delay),
            health,
        })
    }

    pub fn api(&self) -> &PortfolioApi {
        &self.api
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    /// Switches theme and persists it. The in-memory switch stands even if
    /// the write fails.
    pub fn toggle_theme(&mut self) -> Result<Theme, ClientError> {
        self.preferences.theme = self.preferences.theme.toggled();
        self.store.save(&self.preferences)?;
        Ok(self.preferences.theme)
    }

    pub fn health(&self) -> Option<HealthReport> {
        self.health.latest()
    }

    pub async fn wait_for_health(&mut self) -> Option<HealthReport> {
        self.health.first_reading().await
    }

    pub async fn submit_contact(&mut self) -> SubmissionStatus {
        self.contact.submit(&self.api).await
    }

    /// Plain-text rendering of the page.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn status_label(&self) -> &'static str {
        match self.health.latest() {
            Some(report) if report.is_up() => "online",
            Some(_) => "degraded",
            None => "unknown",
        }
    }

    /// Stops the health poller.
    pub async fn shutdown(self) {
        self.health.shutdown().await;
    }
}

impl fmt::Display for PortfolioSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", PROFILE.name, PROFILE.role)?;
        writeln!(f, "{} · {}", PROFILE.specialization, PROFILE.location)?;
        writeln!(f, "theme: {}   system: {}", self.theme().as_str(), self.status_label())?;
        writeln!(f)?;
        writeln!(f, "{}", PROFILE.hero_description)?;
        writeln!(f)?;

        writeln!(f, "== Projects ==")?;
        if self.gallery.is_loading() {
            writeln!(f, "loading...")?;
        } else {
            for project in self.gallery.featured() {
                write_project(f, project)?;
            }

            let archive = self.gallery.archive();
            if self.gallery.show_archive() {
                writeln!(f, "-- Archive --")?;
                for project in archive {
                    write_project(f, project)?;
                }
            } else if !archive.is_empty() {
                writeln!(f, "({} legacy projects hidden)", archive.len())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "== About ==")?;
        writeln!(f, "{}", PROFILE.about_description)?;
        writeln!(f, "- {}", PROFILE.technical_logic)?;
        writeln!(f, "- {}", PROFILE.ui_execution)?;
        writeln!(f, "Education: {}", PROFILE.education)?;
        writeln!(f)?;

        writeln!(f, "== Skills ==")?;
        for group in PROFILE.skills {
            writeln!(f, "{}: {}", group.label, group.items.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "Resume: {}", PROFILE.resume_path)
    }
}

fn write_project(f: &mut fmt::Formatter<'_>, project: &Project) -> fmt::Result {
    let badge = if project.is_live { " [live]" } else { "" };
    writeln!(f, "* {}{}", project.title, badge)?;
    writeln!(f, "  {}", project.description)?;
    if !project.tech_stack.is_empty() {
        writeln!(f, "  stack: {}", project.tech_stack.join(", "))?;
    }
    for (label, url) in [("code", &project.github_url), ("live", &project.live_url)] {
        if let Some(url) = url {
            writeln!(f, "  {}: {}", label, url)?;
        }
    }
    Ok(())
}
