mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, StorageBackend};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::map::handlers::MapState;
use crate::features::map::routes as map_routes;
use crate::features::map::{MapService, TileService};
use crate::features::notifications::routes as notifications_routes;
use crate::features::reports::handlers::ReportState;
use crate::features::reports::routes as reports_routes;
use crate::features::reports::{ReportService, ReportStore};
use crate::features::submissions::routes as submissions_routes;
use crate::features::submissions::services::{FixedSuggestions, SubmissionService};
use crate::modules::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Durable storage backend
    let storage: Arc<dyn KeyValueStorage> = match config.storage.backend {
        StorageBackend::File => {
            let storage = FileStorage::open(config.storage.dir.clone())
                .map_err(|e| anyhow::anyhow!("Failed to open storage: {}", e))?;
            tracing::info!("File storage opened at {}", storage.dir().display());
            Arc::new(storage)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; reports will not survive a restart");
            Arc::new(MemoryStorage::new())
        }
    };

    let store = ReportStore::initialize(storage, config.storage.seed_policy)
        .map_err(|e| anyhow::anyhow!("Failed to initialize report store: {}", e))?;
    tracing::info!("Report store initialized ({:?})", store.origin());

    // Services
    let report_service = Arc::new(ReportService::new(store));
    let suggestions = Arc::new(FixedSuggestions::new(
        config.submission.category_suggestions.clone(),
    ));
    let submission_service = Arc::new(SubmissionService::new(
        Arc::clone(&report_service),
        suggestions,
        config.submission.clone(),
    ));
    let map_service = Arc::new(MapService::new(config.map.clone()));
    let tile_service = Arc::new(
        TileService::new(&config.map)
            .map_err(|e| anyhow::anyhow!("Failed to initialize tile client: {}", e))?,
    );
    tracing::info!("Services initialized (tile source: {})", config.map.tile_url);

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let api_routes = Router::new()
        .merge(reports_routes::routes(ReportState {
            report_service: Arc::clone(&report_service),
            submission_service: Arc::clone(&submission_service),
            frontend_url: Arc::from(config.app.frontend_url.as_str()),
        }))
        .merge(notifications_routes::routes(Arc::clone(&report_service)))
        .merge(map_routes::routes(MapState {
            map_service,
            tile_service,
            report_service: Arc::clone(&report_service),
        }))
        .merge(submissions_routes::routes(submission_service));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        // Photos arrive inline as data URIs
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
