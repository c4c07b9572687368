use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, RestConfig};
use users_core::UserStore;

/// Main entry point for the Users API
///
/// Serves the REST API (user CRUD, health check, Swagger UI) from a single in-memory store that
/// lives for the lifetime of the process.
///
/// # Environment Variables
/// - `USERS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `RUST_LOG`: log filter, on top of the default `users_run=info,api_rest=info`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("users_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;

    tracing::info!("++ Starting Users REST API on {}", cfg.addr());

    let app = api_rest::router(AppState::new(UserStore::new()));

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
