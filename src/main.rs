use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pet_sync_api::config::Config;
use pet_sync_api::crm_client::HubSpotClient;
use pet_sync_api::db::Database;
use pet_sync_api::handlers::{self, AppState};

/// Main entry point for the application.
///
/// Initializes logging, configuration, the database pool and the HubSpot
/// client, then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pet_sync_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize database connection pool and bootstrap the schema
    let db = Database::new(&config.database_url).await?;
    db.init_schema().await?;
    tracing::info!("Database connection pool established");

    // Initialize HubSpot client
    let crm = HubSpotClient::new(config.hubspot_base_url.clone(), config.hubspot_token.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize HubSpot client: {}", e))?;
    tracing::info!("HubSpot client initialized: {}", config.hubspot_base_url);

    // Build application state
    let app_state = Arc::new(AppState {
        db: db.pool.clone(),
        config: config.clone(),
        crm,
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Pet routes sit behind the body-size limit and the rate limiter
    let pet_routes = Router::new()
        .route("/pet", post(handlers::create_pet).get(handlers::list_pets))
        .route(
            "/pet/:id",
            put(handlers::update_pet).delete(handlers::delete_pet),
        )
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(5 * 1024 * 1024))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Hello and health stay outside the rate-limited group
    let app = Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health))
        .merge(pet_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
