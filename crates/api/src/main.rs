use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clipforge_ai::HttpStructurer;
use clipforge_api::config::ServerConfig;
use clipforge_api::{router, state::AppState};
use clipforge_pipeline::ContentPipeline;
use clipforge_render::{HtmlRenderer, RenderConfig, RenderEngine};
use clipforge_store::MemoryStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipforge=debug,clipforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Rendering engine (shared browser + logo, process-wide) ---
    let engine = RenderEngine::start(&RenderConfig::from_env());
    let rendering_available = engine.is_available().await;
    tracing::info!(
        available = rendering_available,
        logo = engine.has_logo(),
        "Rendering engine started"
    );

    // --- Structuring service client ---
    let structurer = Arc::new(HttpStructurer::from_env());

    // --- Entity store ---
    let store = Arc::new(MemoryStore::new());

    // --- Pipeline ---
    let pipeline = Arc::new(ContentPipeline::new(store, structurer));

    // --- App state ---
    let renderer: Arc<dyn HtmlRenderer> = engine.clone();
    let state = AppState {
        pipeline,
        renderer,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = router::build_app(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    engine.shutdown().await;
    tracing::info!("Rendering engine shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
