//! CampusBuddy Student Assistant
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use CampusBuddy::{
    config::Settings,
    catalog::ReplyCatalog,
    shell::ChatShell,
    state::{DialogueResponder, SessionStore},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _logging_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", CampusBuddy::info());

    // Build the reply catalog, applying a configured override file if any
    let catalog = match &settings.catalog.path {
        Some(path) => ReplyCatalog::load_from_file(path)
            .await
            .with_context(|| format!("failed to load reply catalog from {}", path))?,
        None => ReplyCatalog::default(),
    };
    catalog.validate()?;

    // Wire up the responder, session store, and shell
    let responder = DialogueResponder::new(catalog);
    let store = SessionStore::new(&settings.session);
    let shell = ChatShell::new(responder, store, settings.chat.clone());

    info!("CampusBuddy is ready");
    shell.run().await?;

    info!("CampusBuddy shut down");
    Ok(())
}
