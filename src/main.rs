use anyhow::{Context, Result};
use portfolio_i18n::config::Config;
use portfolio_i18n::i18n::{Catalog, CatalogValidator, Language, LanguageRegistry};
use portfolio_i18n::server::{self, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_i18n=info".parse()?),
        )
        .init();

    info!("Starting portfolio i18n service");

    let config = Config::from_env()?;

    // Report catalog gaps at startup; missing keys fall back to English at runtime
    let canonical = Catalog::canonical();
    for language_config in LanguageRegistry::get().list() {
        let catalog = Catalog::for_language(Language::from_code(language_config.code)?);
        let report = CatalogValidator::validate(&canonical, &catalog);
        for issue in report.errors.iter().chain(&report.warnings) {
            warn!("{}", issue);
        }
    }

    let address = config.bind_address();
    info!(
        "Defaults: language={}, theme={}",
        config.default_language, config.default_theme
    );

    let app = server::router(Arc::new(AppState { config }));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Listening on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
