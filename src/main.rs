use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use hackdesk::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting HackDesk");

    let pool = match hackdesk::db::connect(&config.database_url, 10).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            return Err(e.into());
        }
    };
    tracing::info!("Migrations applied");

    let addr = SocketAddr::new(config.host, config.port);
    let mailer = hackdesk::system_mailer(&config);
    let app = hackdesk::build_app(pool, config, mailer);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
