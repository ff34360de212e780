//! Client side of the portfolio site.
//!
//! Everything here talks to the API over HTTP only: the project gallery, the
//! health indicator, the contact form and the locally persisted theme.

use derive_more::Display;

pub mod api;
pub mod config;
pub mod contact_form;
pub mod gallery;
pub mod health_monitor;
pub mod preferences;
pub mod profile;
pub mod site;

pub use api::PortfolioApi;
pub use config::ClientConfig;

#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Request failed: {_0}")]
    Request(String),

    #[display("Unexpected response status: {_0}")]
    Status(u16),

    #[display("Invalid response body: {_0}")]
    Decode(String),

    #[display("Preferences error: {_0}")]
    Preferences(String),
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Status(status.as_u16())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Preferences(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Preferences(err.to_string())
    }
}
