use std::time::Duration;

use tracing::{info, warn};

use crate::{client::PortfolioApi, entities::message::ContactForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Contact modal state: three fields and a submission status.
///
/// `Idle -> Loading -> Success | Error`. Success returns to `Idle` through
/// [`ContactFormState::settle`]; Error stays until the next submit.
#[derive(Debug)]
pub struct ContactFormState {
    pub fields: ContactForm,
    status: SubmissionStatus,
    reset_delay: Duration,
}

impl ContactFormState {
    pub fn new(reset_delay: Duration) -> Self {
        ContactFormState {
            fields: ContactForm::default(),
            status: SubmissionStatus::Idle,
            reset_delay,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The form control's "required" check, nothing more.
    pub fn is_complete(&self) -> bool {
        [&self.fields.name, &self.fields.email, &self.fields.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    /// Posts the form. Incomplete forms are not sent and leave the status
    /// unchanged. Network failures and non-2xx answers both end in `Error`.
    pub async fn submit(&mut self, api: &PortfolioApi) -> SubmissionStatus {
        if !self.is_complete() {
            return self.status;
        }

        self.status = SubmissionStatus::Loading;

        self.status = match api.submit_contact(&self.fields).await {
            Ok(response) => {
                info!("Contact form accepted: {}", response.message);
                SubmissionStatus::Success
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                SubmissionStatus::Error
            }
        };

        self.status
    }

    /// After a success, waits out the confirmation delay, then clears the
    /// fields and returns to `Idle`. No-op in any other state.
    pub async fn settle(&mut self) {
        if self.status != SubmissionStatus::Success {
            return;
        }

        tokio::time::sleep(self.reset_delay).await;
        self.fields.clear();
        self.status = SubmissionStatus::Idle;
    }
}
