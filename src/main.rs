use std::sync::Arc;

use axum::http::Method;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};

use teams_api::api;
use teams_api::application::TeamsService;
use teams_api::config::Config;
use teams_api::infrastructure::logging::init_logging;
use teams_api::infrastructure::repositories::PostgresTeamRepository;
use teams_api::lambda::{self, LambdaHandler};

/// Set by the Lambda execution environment
const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = Config::from_env()?;

    init_logging(&config.log_level, config.log_format);

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "database connection failed");
            e
        })?;

    tracing::info!("Database connected successfully");

    let repo = PostgresTeamRepository::new(pool);
    let in_lambda = std::env::var_os(LAMBDA_RUNTIME_API_VAR).is_some();

    if !in_lambda {
        repo.ensure_collection().await?;
    }

    let service = TeamsService::new(Arc::new(repo));
    let app = api::router(service);

    if in_lambda {
        tracing::info!("Starting Lambda runtime");
        return lambda::run(LambdaHandler::new(app, config.allow_origin)).await;
    }

    // Local mode: same router behind a real CORS layer
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(config.allow_origin))
        .allow_methods([Method::GET]);

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!("Server listening on {}", config.server_addr);

    axum::serve(listener, app.layer(cors)).await?;

    Ok(())
}
