use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// A portfolio entry as stored and listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub is_live: bool,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for `POST /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(url(message = "GitHub URL must be a valid URL"))]
    pub github_url: Option<String>,

    #[validate(url(message = "Live URL must be a valid URL"))]
    pub live_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "default_is_live")]
    pub is_live: bool,

    #[serde(default)]
    pub order: i32,
}

fn default_is_live() -> bool {
    true
}

impl NewProject {
    /// Minimal payload with the schema defaults applied.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        NewProject {
            title: title.into(),
            description: description.into(),
            tech_stack: Vec::new(),
            image_url: None,
            github_url: None,
            live_url: None,
            is_featured: false,
            is_live: default_is_live(),
            order: 0,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Trims text fields and drops empty optional URLs before insert.
    pub fn normalized(self) -> Self {
        let clean_url = |url: Option<String>| {
            url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
        };

        NewProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            tech_stack: self.tech_stack
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            image_url: clean_url(self.image_url),
            github_url: clean_url(self.github_url),
            live_url: clean_url(self.live_url),
            ..self
        }
    }
}
