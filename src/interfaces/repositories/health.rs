use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{errors::AppError, repositories::sqlx_repo::SqlxStoreHealth};

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Succeeds when the store answers a trivial round trip.
    async fn check_connection(&self) -> Result<(), AppError>;
}

#[async_trait]
impl<T: StoreHealth + ?Sized> StoreHealth for Arc<T> {
    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }
}

impl SqlxStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        SqlxStoreHealth { pool }
    }
}

#[async_trait]
impl StoreHealth for SqlxStoreHealth {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
