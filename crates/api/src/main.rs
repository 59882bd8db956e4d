use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formgen_api::config::ServerConfig;
use formgen_api::engine::FormPipeline;
use formgen_api::router::build_app_router;
use formgen_api::seed::seed_samples;
use formgen_api::state::AppState;
use formgen_core::generation::{FormGenerator, StubGenerator};
use formgen_db::{FormStore, MemoryFormStore, PgFormStore};
use formgen_llm::{ChatCompletionsGenerator, LlmConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formgen_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store: Arc<dyn FormStore> = match &config.database_url {
        Some(database_url) => {
            let pool = formgen_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            formgen_db::health_check(&pool)
                .await
                .expect("Database health check failed");

            formgen_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgFormStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, forms are kept in memory only");
            Arc::new(MemoryFormStore::new())
        }
    };

    // --- Generator ---
    let llm_config = LlmConfig::from_env();
    let generator: Arc<dyn FormGenerator> = match ChatCompletionsGenerator::from_config(&llm_config)
        .expect("Failed to build LLM client")
    {
        Some(client) => {
            tracing::info!(
                model = %llm_config.model,
                endpoint = %client.endpoint(),
                "Using chat-completions generator",
            );
            Arc::new(client)
        }
        None => {
            tracing::warn!("No LLM API key configured, using stub generator");
            Arc::new(StubGenerator)
        }
    };

    let pipeline = Arc::new(FormPipeline::new(generator, store));

    // --- Seeding ---
    if config.seed_samples {
        let count = seed_samples(&pipeline)
            .await
            .expect("Failed to seed sample forms");
        tracing::info!(count, "Sample forms seeded");
    }

    // --- App state ---
    let state = AppState { pipeline };

    let app = build_app_router(state, &config);

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

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
