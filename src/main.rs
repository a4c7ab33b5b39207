//! prompt-review server entry point.
//!
//! Loads configuration, initializes logging, wires adapters into the
//! workflow coordinator and serves the REST API.

use std::sync::Arc;

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prompt_review::adapters::events::TracingEventPublisher;
use prompt_review::adapters::http::api_router;
use prompt_review::adapters::roster::StaticMaintainerRoster;
use prompt_review::adapters::storage::{FileSubmissionStore, InMemorySubmissionStore};
use prompt_review::application::WorkflowCoordinator;
use prompt_review::config::{AppConfig, StorageBackend};
use prompt_review::domain::validation::ValidationGate;
use prompt_review::ports::SubmissionRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let repository: Arc<dyn SubmissionRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemorySubmissionStore::new()),
        StorageBackend::File => Arc::new(FileSubmissionStore::new(&config.storage.data_dir)),
    };
    let maintainers = config.workflow.maintainer_ids()?;
    info!(
        backend = ?config.storage.backend,
        maintainers = maintainers.len(),
        environment = ?config.server.environment,
        "starting prompt-review"
    );

    let coordinator = Arc::new(WorkflowCoordinator::new(
        repository,
        Arc::new(StaticMaintainerRoster::new(maintainers)),
        Arc::new(TracingEventPublisher::new()),
        ValidationGate::new(config.workflow.naming_policy()),
    ));

    let app = api_router(coordinator)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_filter`. JSON lines in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
}
