use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use mockall::mock;
use uuid::Uuid;

use portfolio_api::{
    entities::{
        message::{ContactForm, Message, MessageInsert},
        project::{NewProject, Project},
    },
    errors::{AppError, NotifyError},
    notify::Notifier,
    repositories::{message::MessageRepository, project::ProjectRepository},
    use_cases::{contact::ContactHandler, project::ProjectHandler},
};

// === Mocks ===
mock! {
    pub MessageRepo {}

    #[async_trait]
    impl MessageRepository for MessageRepo {
        async fn create_message(&self, msg: &MessageInsert) -> Result<Message, AppError>;
    }
}

mock! {
    pub Mailer {}

    #[async_trait]
    impl Notifier for Mailer {
        async fn notify_new_message(&self, msg: &Message) -> Result<(), NotifyError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    }
}

fn stored(insert: &MessageInsert) -> Message {
    Message {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        email: insert.email.clone(),
        message: insert.message.clone(),
        created_at: Utc::now(),
    }
}

fn project(order: i32, age_minutes: i64) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: format!("Project {}", order),
        description: "desc".into(),
        tech_stack: vec![],
        image_url: None,
        github_url: None,
        live_url: None,
        is_featured: false,
        is_live: true,
        order,
        created_at: Utc::now() - Duration::minutes(age_minutes),
    }
}

// === Contact ===

#[tokio::test]
async fn test_contact_stores_trimmed_message_then_notifies() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message()
        .withf(|m| m.name == "Ada" && m.email == "Ada@Example.com" && m.message == "Hello")
        .times(1)
        .returning(|m| Ok(stored(m)));

    let mut mailer = MockMailer::new();
    mailer.expect_notify_new_message()
        .withf(|m| m.name == "Ada")
        .times(1)
        .returning(|_| Ok(()));

    let handler = ContactHandler::new(repo, Arc::new(mailer));

    let receipt = handler
        .submit_contact_message(ContactForm::new(" Ada ", " Ada@Example.com ", "Hello\n"))
        .await
        .unwrap();

    assert!(receipt.response.success);
    assert_eq!(receipt.message.email, "Ada@Example.com");
    receipt.notification.await.unwrap();
}

#[tokio::test]
async fn test_contact_notification_failure_does_not_fail_submission() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message().times(1).returning(|m| Ok(stored(m)));

    let mut mailer = MockMailer::new();
    mailer.expect_notify_new_message()
        .times(1)
        .returning(|_| Err(NotifyError::Transport("connection reset".into())));

    let handler = ContactHandler::new(repo, Arc::new(mailer));

    let receipt = handler
        .submit_contact_message(ContactForm::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(receipt.response.message, "Message sent successfully!");
    // the detached task swallows the error
    assert!(receipt.notification.await.is_ok());
}

#[tokio::test]
async fn test_contact_store_failure_is_internal_error_and_skips_email() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message()
        .times(1)
        .returning(|_| Err(AppError::InternalError("connection closed".into())));

    let mut mailer = MockMailer::new();
    mailer.expect_notify_new_message().times(0);

    let handler = ContactHandler::new(repo, Arc::new(mailer));

    let result = handler
        .submit_contact_message(ContactForm::new("Ada", "ada@example.com", "Hello"))
        .await;

    match result {
        Err(AppError::InternalError(msg)) => assert_eq!(msg, "Failed to process message."),
        other => panic!("expected internal error, got {:?}", other.map(|r| r.message)),
    }
}

#[tokio::test]
async fn test_contact_validation_failure_touches_nothing() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message().times(0);

    let mut mailer = MockMailer::new();
    mailer.expect_notify_new_message().times(0);

    let handler = ContactHandler::new(repo, Arc::new(mailer));

    let result = handler
        .submit_contact_message(ContactForm::new("Ada", "", "Hello"))
        .await;

    match result {
        Err(AppError::ValidationError(fields)) => {
            assert!(fields.iter().any(|f| f.field == "email"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|r| r.message)),
    }
}

// === Projects ===

#[tokio::test]
async fn test_list_projects_sorts_by_order_then_age() {
    let mut repo = MockProjectRepo::new();
    let older = project(1, 10);
    let newer = project(1, 1);
    let older_id = older.id;

    let unsorted = vec![project(3, 0), newer, project(2, 0), older];
    repo.expect_list_projects()
        .times(1)
        .returning(move || Ok(unsorted.clone()));

    let handler = ProjectHandler::new(repo);
    let projects = handler.list_projects().await.unwrap();

    let orders: Vec<i32> = projects.iter().map(|p| p.order).collect();
    assert_eq!(orders, vec![1, 1, 2, 3]);
    assert_eq!(projects[0].id, older_id);
}

#[tokio::test]
async fn test_list_projects_store_failure_is_generic() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .returning(|| Err(AppError::InternalError("pool timed out".into())));

    let handler = ProjectHandler::new(repo);

    match handler.list_projects().await {
        Err(AppError::InternalError(msg)) => assert_eq!(msg, "Failed to fetch projects"),
        other => panic!("expected internal error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_project_trims_before_storing() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .withf(|p| p.title == "X" && p.description == "Y" && p.order == 5)
        .times(1)
        .returning(|p| {
            let mut created = project(p.order, 0);
            created.title = p.title.clone();
            created.description = p.description.clone();
            Ok(created)
        });

    let handler = ProjectHandler::new(repo);
    let created = handler
        .create_project(NewProject::new("  X ", "Y\n").with_order(5))
        .await
        .unwrap();

    assert_eq!(created.title, "X");
    assert_eq!(created.order, 5);
}

#[tokio::test]
async fn test_create_project_rejects_blank_title() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().times(0);

    let handler = ProjectHandler::new(repo);
    let result = handler.create_project(NewProject::new("   ", "Y")).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
