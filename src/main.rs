use axum::{
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loan_risk_api::config::Config;
use loan_risk_api::handlers::{self, AppState};
use loan_risk_api::openai::ChatClient;
use loan_risk_api::policy::PolicyDocuments;
use loan_risk_api::records::CustomerDirectory;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Policy document loading.
/// - The fixed customer record sets.
/// - The external model client and reply cache.
/// - HTTP routes and middleware (CORS, Rate Limiting).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loan_risk_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Load the two policy documents once; their text is embedded verbatim
    // into every prompt for the life of the process
    let policies = PolicyDocuments::load(&config).await?;

    // Seed the fixed record sets (read-only after this point)
    let directory = CustomerDirectory::seed();
    tracing::info!("Customer record sets seeded: {} customers", directory.ids().len());

    // Initialize the chat-completions client
    let chat_client = ChatClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    )?;
    tracing::info!("Chat client initialized: {}", config.openai_base_url);

    // Model reply cache (1 hour TTL). With zero-temperature sampling and
    // immutable inputs, identical requests produce identical prompts, so a
    // cached reply stands in for a repeat model call.
    let reply_cache = Cache::builder()
        .time_to_live(Duration::from_secs(3600))
        .max_capacity(1_000)
        .build();
    tracing::info!("Reply cache initialized (1h TTL)");

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        directory,
        policies,
        chat_client,
        reply_cache,
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

    // Build protected routes with security layers
    let protected_routes = Router::new()
        // Form page
        .route("/", get(handlers::serve_form_page))
        // API endpoints
        .route("/api/v1/customers", get(handlers::list_customers))
        .route("/api/v1/customers/:id", get(handlers::get_customer))
        .route("/api/v1/assess", post(handlers::assess))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 64KB max payload (the API only takes tiny JSON bodies)
                .layer(RequestBodyLimitLayer::new(64 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
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
