use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{
    entities::message::Message,
    errors::NotifyError,
    notify::Notifier,
    settings::AppConfig,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    html: String,
}

/// Sends notifications through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendNotifier {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
    to: String,
}

impl ResendNotifier {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(ResendNotifier {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            from: from.into(),
            to: to.into(),
        })
    }

    /// Builds a notifier when both the API key and operator address are set.
    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        let api_key = config.resend_api_key.as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| NotifyError::NotConfigured("APP_RESEND_API_KEY is not set".into()))?;
        let to = config.notification_email.as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| NotifyError::NotConfigured("APP_NOTIFICATION_EMAIL is not set".into()))?;

        Self::new(&config.resend_api_url, api_key, &config.notification_from, to)
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify_new_message(&self, msg: &Message) -> Result<(), NotifyError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: vec![&self.to],
            reply_to: &msg.email,
            subject: subject_line(&msg.name),
            html: render_email(msg),
        };

        let response = self.client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status: status.as_u16(), body });
        }

        tracing::debug!(message_id = %msg.id, "notification accepted by email provider");
        Ok(())
    }
}

fn subject_line(name: &str) -> String {
    // Header values must stay on one line
    let name: String = name.chars().filter(|c| !c.is_control()).collect();
    format!("New Portfolio Message from {}", name)
}

/// HTML body for the operator email. Submitted text is escaped.
pub fn render_email(msg: &Message) -> String {
    let name = ammonia::clean_text(&msg.name);
    let email = ammonia::clean_text(&msg.email);
    let message = ammonia::clean_text(&msg.message).replace("&#10;", "<br>");

    format!(
        r#"<div style="font-family: sans-serif; padding: 20px; border: 1px solid #eee; border-radius: 10px;">
  <h2 style="color: #0891b2;">New Contact Inquiry</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> {email}</p>
  <p><strong>Message:</strong></p>
  <div style="background: #f9f9f9; padding: 15px; border-radius: 5px;">{message}</div>
  <hr style="margin-top: 20px; border: 0; border-top: 1px solid #eee;" />
  <p style="font-size: 12px; color: #888;">Sent from your Portfolio Server</p>
</div>"#
    )
}
