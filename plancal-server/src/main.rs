use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plancal_core::config::PlanCalConfig;
use plancal_core::store::JsonFileStore;
use plancal_server::{AppState, singleton};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plancal_server=info,plancal_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlanCalConfig::load()?;
    let db_path = config.db_path();

    // Ensure only one server writes this store
    let _lock = singleton::acquire_lock(&db_path)?;

    let store = JsonFileStore::open(&db_path)?;
    tracing::info!(path = %store.path().display(), "opened entry store");

    let state = AppState::new(Arc::new(store), &config.session());

    let app = plancal_server::app(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("plancal-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
