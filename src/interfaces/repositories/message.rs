use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::message::{Message, MessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

/// Write side of the contact audit trail. Messages are never read back
/// through the API.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, msg: &MessageInsert) -> Result<Message, AppError>;
}

#[async_trait]
impl<T: MessageRepository + ?Sized> MessageRepository for Arc<T> {
    async fn create_message(&self, msg: &MessageInsert) -> Result<Message, AppError> {
        (**self).create_message(msg).await
    }
}

impl SqlxMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &MessageInsert) -> Result<Message, AppError> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }
}
