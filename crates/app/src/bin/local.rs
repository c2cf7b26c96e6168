// Job Board API - Local Development Server

use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use jobboard_app::{create_app, with_middleware, AppDependencies};
use jobboard_common::{config::Config, connect_lazy_pool};
use sqlx::PgPool;

/// Pause between migration attempts while the database is unreachable
const MIGRATION_RETRY_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config);

    info!("Starting Job Board API server");

    // No connection is opened here; /health reports the database state.
    let pool = connect_lazy_pool(&config)?;
    tokio::spawn(run_migrations(pool.clone()));

    let app = create_app(&config, AppDependencies::postgres(pool.clone()));
    let app = with_middleware(app, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("Server starting on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Apply pending migrations, retrying until the database accepts them
async fn run_migrations(pool: PgPool) {
    loop {
        match sqlx::migrate!("../../migrations").run(&pool).await {
            Ok(()) => {
                info!("Database migrations applied");
                return;
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retry_in_secs = MIGRATION_RETRY_DELAY.as_secs(),
                    "Failed to run migrations"
                );
                tokio::time::sleep(MIGRATION_RETRY_DELAY).await;
            }
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
