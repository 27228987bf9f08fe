use anyhow::Result;

use profile_directory::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env)?;

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        load_latency_ms = settings.profile_load_latency.as_millis() as u64,
        seeded = settings.seed_sample_profiles,
        "Starting profile directory"
    );

    let state = app::AppState::from_settings(settings.clone());

    // Warm the profile set in the background (non-blocking)
    tokio::spawn({
        let state = state.clone();
        async move {
            match state.profiles.open().await {
                Ok(count) => tracing::info!(count, "Profile set ready"),
                Err(e) => tracing::warn!(error = %e, "Initial profile load failed - will retry on first request"),
            }
        }
    });

    let app = app::create_app(state.clone());

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.profiles.close().await?;
    tracing::info!("Shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
