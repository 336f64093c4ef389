mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use snip_core::Validity;
use snip_gateway::{App, AppState};
use snip_generator::RandomGenerator;
use snip_registry::{InMemoryRegistry, RegistrySettings};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CLI::try_parse()?;

    snip_telemetry::init(config.log_format)?;

    let generator = RandomGenerator::new(config.code_length).context("invalid --code-length")?;
    let settings = RegistrySettings::builder()
        .default_validity(
            Validity::from_minutes(config.default_validity_minutes)
                .context("invalid --default-validity-minutes")?,
        )
        .max_generation_attempts(config.max_generation_attempts)
        .reserved_codes(App::reserved_codes())
        .build();
    let registry = InMemoryRegistry::with_settings(generator, settings);

    let mut state = AppState::new(Arc::new(registry));
    if let Some(public_base_url) = &config.public_base_url {
        state = state.with_public_base_url(public_base_url);
    }

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;

    info!(
        listen_addr = %listener.local_addr()?,
        public_base_url = config.public_base_url.as_deref().unwrap_or("<from Host header>"),
        default_validity_minutes = config.default_validity_minutes,
        code_length = config.code_length,
        "starting gateway server"
    );

    axum::serve(
        listener,
        App::router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
