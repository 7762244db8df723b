mod app;
mod cache;
mod config;
mod handlers;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Postboard - Share job posts and repost the good ones
#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Interface the server binds to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// TCP port the server listens on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Deployment environment label, used for log context only
    #[arg(long, default_value = "development", env = "APP_ENV")]
    env: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env();
    tracing::info!(
        environment = %cli.env,
        post_backend = ?config.post_backend,
        user_backend = ?config.user_backend,
        cache_backend = ?config.cache_backend,
        "Starting postboard"
    );

    // Backends connect before the socket opens; a bad configuration
    // aborts startup here.
    let state = AppState::new(&config).await?;
    let app = create_app(state);

    let listener = bind_listener(&cli).await?;
    tracing::info!(addr = %listener.local_addr()?, "Accepting connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited");
    Ok(())
}

/// Set up the tracing subscriber, honoring `RUST_LOG` when present.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Binds the listening socket, preferring one inherited through
/// `listenfd` (systemfd auto-reload workflows) over the CLI address.
async fn bind_listener(cli: &Cli) -> Result<TcpListener> {
    if let Some(inherited) = ListenFd::from_env().take_tcp_listener(0)? {
        inherited.set_nonblocking(true)?;
        return Ok(TcpListener::from_std(inherited)?);
    }

    let addr = format!("{}:{}", cli.host, cli.port);
    Ok(TcpListener::bind(&addr).await?)
}

/// Completes when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("Ctrl+C received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
