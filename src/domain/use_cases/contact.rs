use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    entities::message::{ContactForm, ContactResponse, Message, MessageInsert},
    errors::AppError,
    notify::Notifier,
    repositories::message::MessageRepository,
};

/// Outcome of a committed contact submission.
///
/// `notification` is the detached email task. The HTTP layer drops it; tests
/// may await it to observe the notifier.
#[derive(Debug)]
pub struct ContactReceipt {
    pub message: Message,
    pub response: ContactResponse,
    pub notification: JoinHandle<()>,
}

pub struct ContactHandler<R, N>
where
    R: MessageRepository,
    N: Notifier + Clone + 'static,
{
    pub message_repo: R,
    pub notifier: N,
}

impl<R, N> ContactHandler<R, N>
where
    R: MessageRepository,
    N: Notifier + Clone + 'static,
{
    pub fn new(message_repo: R, notifier: N) -> Self {
        ContactHandler { message_repo, notifier }
    }

    /// Validates and stores the message, then hands the operator email to a
    /// background task. Only the store write decides the result.
    pub async fn submit_contact_message(
        &self,
        form: ContactForm,
    ) -> Result<ContactReceipt, AppError> {
        let form = form.normalized();
        form.validate()?;

        let insert = MessageInsert::from(form);

        let message = self.message_repo
            .create_message(&insert)
            .await
            .map_err(|e| {
                error!("Database error while storing contact message: {}", e);
                AppError::InternalError("Failed to process message.".to_string())
            })?;

        info!(message_id = %message.id, "Contact message stored");

        let notification = self.dispatch_notification(message.clone());

        Ok(ContactReceipt {
            message,
            response: ContactResponse::received(),
            notification,
        })
    }

    fn dispatch_notification(&self, message: Message) -> JoinHandle<()> {
        let notifier = self.notifier.clone();

        tokio::spawn(async move {
            match notifier.notify_new_message(&message).await {
                Ok(()) => info!(message_id = %message.id, "Contact notification sent"),
                Err(e) => warn!(message_id = %message.id, "Email notification failed: {}", e),
            }
        })
    }
}
