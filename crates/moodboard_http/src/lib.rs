//! HTTP boundary for the employee mood board.
//!
//! Exposes the two core operations over JSON:
//! - `POST /api/mood` submits one mood entry.
//! - `GET /api/mood` returns every entry plus the stats snapshot.
//!
//! The store lives for the lifetime of [`run`]; stopping the server drops
//! every entry.

use std::{io, sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use log::{error, info};
use moodboard_core::{core_version, db::DbError, init_logging, MoodStore};
use thiserror::Error;
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod routes;

use config::{LogConfig, ServerConfig};
use routes::{health_handler, list_moods_handler, submit_mood_handler};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("mood store setup failed: {0}")]
    Store(#[from] DbError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Builds the API router over a shared store.
pub fn build_router(store: Arc<MoodStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/api/mood",
            get(list_moods_handler).post(submit_mood_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(store)
}

/// Reads the environment, initializes logging and serves until shutdown.
///
/// Logging comes up before the bind address is parsed so address fallbacks
/// are recorded.
pub async fn run_from_env() -> Result<(), StartupError> {
    let log = LogConfig::from_env();
    init_logging(&log.level, log.dir.as_deref()).map_err(StartupError::Logging)?;
    run(ServerConfig::from_env()).await
}

/// Opens the store and serves until shutdown. Expects logging to be set up.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let store = Arc::new(MoodStore::open_in_memory()?);
    let app = build_router(store);

    let address = config.address().to_string();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(
        "event=server_start module=http status=ok address={} version={}",
        address,
        core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("event=server_stop module=http status=ok");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("event=signal_install module=http status=error signal=ctrl_c error={err}");
            std::future::pending::<()>().await;
        }
        info!("event=shutdown module=http status=start signal=ctrl_c");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("event=shutdown module=http status=start signal=terminate");
            }
            Err(err) => {
                error!("event=signal_install module=http status=error signal=terminate error={err}");
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
