//! HTTP server initialization and runtime setup.
//!
//! Handles datastore selection, webhook notifier setup, publish worker
//! spawning, and Axum server lifecycle.

use crate::config::{Config, DataBackend};
use crate::domain::publish_worker::run_publish_worker;
use crate::infrastructure::persistence::Repositories;
use crate::infrastructure::webhook::{HttpWebhookNotifier, NullNotifier, PublishNotifier};
use crate::routes::{RateLimit, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The datastore (PostgreSQL pool + migrations, or in-memory)
/// - The webhook notifier (HTTP, or a no-op when `WEBHOOK_URL` is unset)
/// - The background publish worker
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The webhook client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repositories = match config.data_backend {
        DataBackend::Postgres => {
            let pool = connect_pool(&config).await?;
            Repositories::postgres(Arc::new(pool))
        }
        DataBackend::Memory => {
            tracing::warn!("Using in-memory datastore; content is lost on restart");
            Repositories::memory()
        }
    };

    let notifier: Arc<dyn PublishNotifier> = match &config.webhook_url {
        Some(url) => Arc::new(
            HttpWebhookNotifier::new(
                url.clone(),
                Duration::from_secs(config.webhook_timeout_secs),
            )
            .context("Failed to build webhook client")?,
        ),
        None => {
            tracing::info!("Webhook disabled (NullNotifier)");
            Arc::new(NullNotifier::new())
        }
    };

    let webhook_enabled = notifier.is_enabled();
    let (publish_tx, publish_rx) = mpsc::channel(config.publish_queue_capacity);
    tokio::spawn(run_publish_worker(publish_rx, notifier));
    tracing::info!("Publish worker started");

    let state = AppState::new(
        repositories,
        publish_tx,
        config.session_signing_secret.clone(),
        webhook_enabled,
    );

    let app = app_router(
        state,
        RateLimit {
            period_secs: config.rate_limit_period_secs,
            burst: config.rate_limit_burst,
        },
    )?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to PostgreSQL with the configured pool settings and applies
/// pending migrations.
async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set when DATA_BACKEND is 'postgres'")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
