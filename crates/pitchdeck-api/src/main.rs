//! Pitchdeck CLI and HTTP server entry point.
//!
//! Binary name: `pitchdeck`
//!
//! Parses CLI arguments, loads configuration, wires services, then either
//! generates a single deck or starts the HTTP server.

mod cli;
mod http;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use pitchdeck_infra::config::{load_effective_config, resolve_api_key};
use pitchdeck_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

/// How often expired rate-limit windows are swept.
const RATE_LIMIT_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_effective_config(&cli.config).await?;
    let api_key = resolve_api_key(|key| std::env::var(key).ok())?;
    let state = AppState::init(config, api_key)?;

    match cli.command {
        Commands::Generate(args) => cli::generate::generate(&state, args, cli.json).await,
        Commands::Serve { port, host } => serve(state, &host, port).await,
    }
}

async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Pitchdeck listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    if let Some(limiter) = state.rate_limiter.clone() {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(RATE_LIMIT_SWEEP_INTERVAL);
            loop {
                ticker.tick().await;
                let removed = limiter.purge_expired();
                if removed > 0 {
                    tracing::debug!(removed, "purged expired rate-limit windows");
                }
            }
        });
    }

    tracing::info!(
        %addr,
        provider = state.generator.provider_name(),
        model = state.generator.model(),
        rate_limited = state.rate_limiter.is_some(),
        auth = state.auth_token_hash.is_some(),
        "server starting"
    );

    let router = http::router::build_router(state);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
}
