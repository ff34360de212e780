#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use portfolio_api::{
    entities::{
        message::{Message, MessageInsert},
        project::{NewProject, Project},
    },
    errors::{AppError, NotifyError},
    notify::Notifier,
    repositories::{health::StoreHealth, message::MessageRepository, project::ProjectRepository},
    settings::AppConfig,
    startup::run,
    AppState, SharedNotifier,
};
use reqwest::Client;
use uuid::Uuid;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const FOREIGN_ORIGIN: &str = "https://evil.example";

/// Project store kept in memory. Returns records in insertion order so the
/// listing order is decided by the API, not the fake.
#[derive(Default)]
pub struct InMemoryProjects {
    projects: Mutex<Vec<Project>>,
    unavailable: AtomicBool,
}

impl InMemoryProjects {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.projects.lock().unwrap().len()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("store unavailable".into()));
        }
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("store unavailable".into()));
        }

        let stored = Project {
            id: Uuid::new_v4(),
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.clone(),
            image_url: project.image_url.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            is_featured: project.is_featured,
            is_live: project.is_live,
            order: project.order,
            created_at: Utc::now(),
        };

        self.projects.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryMessages {
    messages: Mutex<Vec<Message>>,
    fail_writes: AtomicBool,
}

impl InMemoryMessages {
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn create_message(&self, msg: &MessageInsert) -> Result<Message, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("write failed".into()));
        }

        let stored = Message {
            id: Uuid::new_v4(),
            name: msg.name.clone(),
            email: msg.email.clone(),
            message: msg.message.clone(),
            created_at: Utc::now(),
        };

        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

pub struct InMemoryStoreHealth {
    connected: AtomicBool,
}

impl Default for InMemoryStoreHealth {
    fn default() -> Self {
        InMemoryStoreHealth { connected: AtomicBool::new(true) }
    }
}

impl InMemoryStoreHealth {
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreHealth for InMemoryStoreHealth {
    async fn check_connection(&self) -> Result<(), AppError> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::InternalError("connection refused".into()))
        }
    }
}

/// Records every notification it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_new_message(&self, msg: &Message) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(msg.clone());
        Ok(())
    }
}

/// Always fails, counting attempts.
#[derive(Default)]
pub struct FailingNotifier {
    attempts: AtomicUsize,
}

impl FailingNotifier {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_new_message(&self, _msg: &Message) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Rejected { status: 502, body: "provider down".into() })
    }
}

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub projects: Arc<InMemoryProjects>,
    pub messages: Arc<InMemoryMessages>,
    pub store_health: Arc<InMemoryStoreHealth>,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_notifier(Arc::new(RecordingNotifier::default())).await
    }

    pub async fn spawn_with_notifier(notifier: SharedNotifier) -> Self {
        let config = AppConfig::testing("postgres://unused/test_db");

        let projects = Arc::new(InMemoryProjects::default());
        let messages = Arc::new(InMemoryMessages::default());
        let store_health = Arc::new(InMemoryStoreHealth::default());

        let state = web::Data::new(AppState::from_parts(
            projects.clone(),
            messages.clone(),
            store_health.clone(),
            notifier,
        ));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = run(listener, state, &config).expect("Failed to bind server");
        tokio::spawn(server);

        let client = Client::new();
        while client.get(&address).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        TestApp {
            address,
            client,
            projects,
            messages,
            store_health,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/contact"))
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }

    pub async fn post_project(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/projects"))
            .json(body)
            .send()
            .await
            .expect("Failed to post project")
    }

    pub async fn list_projects(&self) -> Vec<Project> {
        self.client
            .get(self.url("/api/projects"))
            .send()
            .await
            .expect("Failed to list projects")
            .json()
            .await
            .expect("Failed to parse project list")
    }
}

/// Polls `condition` for up to two seconds.
pub async fn eventually(condition: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
