//! Command-line driver for the portfolio client.

use std::time::Duration;

use clap::{Parser, Subcommand};
use portfolio_api::{
    client::{contact_form::SubmissionStatus, site::PortfolioSite, ClientConfig},
    entities::message::ContactForm,
    telemetry::init_tracing,
};

const HEALTH_WAIT: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "portfolio-site", version, about = "Render the portfolio site from the API")]
struct Cli {
    /// API base URL (overrides APP_API_BASE_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page.
    Show {
        /// Include archive projects.
        #[arg(long)]
        archive: bool,
    },
    /// Switch between light and dark theme.
    Theme,
    /// Send a message through the contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(false);

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }

    let mut site = PortfolioSite::bootstrap(config).await?;

    match cli.command.unwrap_or(Command::Show { archive: false }) {
        Command::Show { archive } => {
            if archive {
                site.gallery.toggle_archive();
            }
            if tokio::time::timeout(HEALTH_WAIT, site.wait_for_health()).await.is_err() {
                tracing::warn!("No health reading within {:?}", HEALTH_WAIT);
            }
            println!("{}", site.render());
        }
        Command::Theme => {
            let theme = site.toggle_theme()?;
            println!("theme: {}", theme.as_str());
        }
        Command::Contact { name, email, message } => {
            site.contact.fields = ContactForm::new(name, email, message);
            match site.submit_contact().await {
                SubmissionStatus::Success => {
                    println!("Message Received! I'll get back to you shortly.");
                    site.contact.settle().await;
                }
                SubmissionStatus::Error => println!("Something went wrong. Please try again."),
                SubmissionStatus::Idle | SubmissionStatus::Loading => {
                    println!("All fields are required.")
                }
            }
        }
    }

    site.shutdown().await;
    Ok(())
}
