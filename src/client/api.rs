use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{
    client::ClientError,
    entities::{
        health::HealthReport,
        message::{ContactForm, ContactResponse},
        project::Project,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Typed HTTP access to the portfolio API.
#[derive(Clone)]
pub struct PortfolioApi {
    client: Client,
    base_url: String,
}

impl PortfolioApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(PortfolioApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ClientError> {
        let projects = self.client
            .get(self.url("/api/projects"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Project>>()
            .await?;

        Ok(projects)
    }

    /// Reads `/health`. A 503 still carries a report and is returned as one.
    pub async fn fetch_health(&self) -> Result<HealthReport, ClientError> {
        let response = self.client
            .get(self.url("/health"))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::SERVICE_UNAVAILABLE => {
                Ok(response.json::<HealthReport>().await?)
            }
            status => Err(ClientError::Status(status.as_u16())),
        }
    }

    /// Posts the contact form. Any non-2xx answer is an error.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactResponse, ClientError> {
        let response = self.client
            .post(self.url("/api/contact"))
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<ContactResponse>().await?)
    }
}
