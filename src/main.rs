//! Snooker Scorer Back binary entrypoint wiring configuration, storage and the REST API.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use snooker_scorer_back::{
    config::AppConfig,
    dao::{
        match_store::{MatchStore, memory::InMemoryMatchStore},
        storage::StorageError,
    },
    routes,
    services::{session_reaper, storage_supervisor},
    state::{AppState, SharedState},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app_state = AppState::new(AppConfig::load());

    spawn_storage_supervisor(app_state.clone())?;
    tokio::spawn(session_reaper::run(app_state.clone()));
    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Start the background task that installs the storage backend selected by
/// `STORAGE_BACKEND` (`mongo` by default, or `memory`).
fn spawn_storage_supervisor(state: SharedState) -> anyhow::Result<()> {
    let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongo".into());

    match backend.trim().to_ascii_lowercase().as_str() {
        "memory" => {
            info!("using in-memory storage; finished matches are lost on restart");
            let store = InMemoryMatchStore::new();
            tokio::spawn(storage_supervisor::run(state, move || {
                let store = store.clone();
                async move { Ok::<_, StorageError>(Arc::new(store) as Arc<dyn MatchStore>) }
            }));
        }
        #[cfg(feature = "mongo-store")]
        "mongo" | "mongodb" => {
            use snooker_scorer_back::dao::match_store::mongodb::{
                ConnectRetry, MongoConfig, MongoMatchStore,
            };

            let uri =
                env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
            let db_name = env::var("MONGO_DB").ok();
            let connect_retry = ConnectRetry {
                max_attempts: env::var("MONGO_CONNECT_ATTEMPTS")
                    .ok()
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(ConnectRetry::default().max_attempts),
                ..ConnectRetry::default()
            };
            info!(db = db_name.as_deref().unwrap_or("<default>"), "using MongoDB storage");

            tokio::spawn(storage_supervisor::run(state, move || {
                let uri = uri.clone();
                let db_name = db_name.clone();
                async move {
                    let config = MongoConfig::from_uri(&uri, db_name.as_deref())
                        .await?
                        .with_connect_retry(connect_retry);
                    let store = MongoMatchStore::connect(config).await?;
                    Ok::<_, StorageError>(Arc::new(store) as Arc<dyn MatchStore>)
                }
            }));
        }
        other => anyhow::bail!("unsupported STORAGE_BACKEND `{other}`"),
    }

    Ok(())
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
