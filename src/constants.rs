use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://fullstack-dev-portfolio.netlify.app",
    "https://fullstack-dev-portfolio-abpg.vercel.app",
    "http://localhost:5173",
];

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_NOTIFICATION_FROM: &str = "Portfolio <onboarding@resend.dev>";

pub const LIVENESS_TEXT: &str = "Portfolio API is running...";
