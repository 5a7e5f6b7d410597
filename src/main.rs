use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use vitals_core::{AnalyzerConfig, DEFAULT_REST_ADDR, parallel_threshold_from_env_value};

/// Main entry point for the vitals triage service
///
/// Resolves configuration once at startup and serves the REST API with OpenAPI/Swagger
/// documentation.
///
/// # Environment Variables
/// - `VITALS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `VITALS_PARALLEL_THRESHOLD`: batch size at which analysis switches to the rayon pool
///   (default: 1024, `0` disables)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration values cannot be parsed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitals=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("VITALS_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let parallel_threshold =
        parallel_threshold_from_env_value(std::env::var("VITALS_PARALLEL_THRESHOLD").ok())?;
    let cfg = AnalyzerConfig::new(parallel_threshold);

    tracing::info!("++ Starting vitals triage REST on {}", rest_addr);
    tracing::info!("++ Parallel analysis threshold: {}", cfg.parallel_threshold());

    let app = api_rest::router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
