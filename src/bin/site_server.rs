// Site server binary entry point
//
// Usage: cargo run --bin site_server
// Configuration comes from the environment (see SiteConfig::from_env).

use ecotech_site::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "ecotech_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  SITE_NAME: {}", config.site_name);
    tracing::info!("  PUBLIC_URL: {}", config.public_url);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  DEFAULT_THEME: {}", config.default_theme);
    tracing::info!("  BIND: {}", config.socket_addr());

    let addr = config.socket_addr();
    let state = AppState::new(config)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
