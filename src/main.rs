use anyhow::{bail, Result};
use chrono::Datelike;
use tracing::info;

use portfolio_translator::config::Config;
use portfolio_translator::content::english_content;
use portfolio_translator::i18n::TranslationMetrics;
use portfolio_translator::session::LanguageSession;
use portfolio_translator::translator::TranslationClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_translator=info".parse()?),
        )
        .init();

    info!("Starting portfolio content translation");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Seed the canonical English document and toggle to Spanish
    let client = TranslationClient::new(config)?;
    let mut session = LanguageSession::new(client, english_content());
    session.toggle().await;

    if let Some(error) = session.take_last_error() {
        bail!("Translation failed: {}", error);
    }

    let document = session.active_document();
    info!(
        "Footer for {}: {}",
        session.active_language().native_name(),
        document.rendered_copyright(chrono::Utc::now().year())
    );

    println!("{}", serde_json::to_string_pretty(document)?);

    let report = TranslationMetrics::global().report();
    info!(
        "Translation metrics: {}",
        serde_json::to_string(&report)?
    );

    Ok(())
}
