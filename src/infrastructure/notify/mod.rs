use std::sync::Arc;

use async_trait::async_trait;

use crate::{entities::message::Message, errors::NotifyError};

pub mod resend;

/// Delivers an operator notification for a stored contact message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_new_message(&self, msg: &Message) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn notify_new_message(&self, msg: &Message) -> Result<(), NotifyError> {
        (**self).notify_new_message(msg).await
    }
}

/// Stand-in used when no email provider is configured.
#[derive(Debug, Clone)]
pub struct DisabledNotifier {
    reason: String,
}

impl DisabledNotifier {
    pub fn new(reason: impl Into<String>) -> Self {
        DisabledNotifier { reason: reason.into() }
    }
}

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify_new_message(&self, _msg: &Message) -> Result<(), NotifyError> {
        Err(NotifyError::NotConfigured(self.reason.clone()))
    }
}
