use std::sync::Arc;

use tracing::warn;

mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;
pub mod startup;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{db, notify};

use notify::{resend::ResendNotifier, DisabledNotifier, Notifier};
use repositories::{
    health::StoreHealth,
    message::MessageRepository,
    project::ProjectRepository,
    sqlx_repo::{SqlxMessageRepo, SqlxProjectRepo, SqlxStoreHealth},
};
use use_cases::{contact::ContactHandler, health::HealthHandler, project::ProjectHandler};

pub type ProjectStore = Arc<dyn ProjectRepository>;
pub type MessageStore = Arc<dyn MessageRepository>;
pub type StoreProbe = Arc<dyn StoreHealth>;
pub type SharedNotifier = Arc<dyn Notifier>;

pub type AppProjectHandler = ProjectHandler<ProjectStore>;
pub type AppContactHandler = ContactHandler<MessageStore, SharedNotifier>;
pub type AppHealthHandler = HealthHandler<StoreProbe>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub health_handler: AppHealthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        AppState::from_parts(
            Arc::new(SqlxProjectRepo::new(pool.clone())),
            Arc::new(SqlxMessageRepo::new(pool.clone())),
            Arc::new(SqlxStoreHealth::new(pool)),
            build_notifier(config),
        )
    }

    pub fn from_parts(
        projects: ProjectStore,
        messages: MessageStore,
        store_health: StoreProbe,
        notifier: SharedNotifier,
    ) -> Self {
        AppState {
            project_handler: ProjectHandler::new(projects),
            contact_handler: ContactHandler::new(messages, notifier),
            health_handler: HealthHandler::new(store_health),
        }
    }
}

fn build_notifier(config: &settings::AppConfig) -> SharedNotifier {
    match ResendNotifier::from_config(config) {
        Ok(notifier) => Arc::new(notifier),
        Err(e) => {
            warn!("Contact email notifications disabled: {}", e);
            Arc::new(DisabledNotifier::new(e.to_string()))
        }
    }
}
