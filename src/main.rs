use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info, warn};
use uslugi_match::config::Settings;
use uslugi_match::routes::{self, matches::AppState};
use uslugi_match::services::GeminiClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting uslugi-match service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the Gemini client when a credential is available. Without
    // one the server still serves traffic; match requests report the
    // misconfiguration per-request.
    let gemini = match settings.gemini.api_key.as_deref() {
        Some(key) if !key.is_empty() => {
            info!("Gemini client initialized (model: {})", settings.gemini.model);
            Some(Arc::new(GeminiClient::new(
                settings.gemini.base_url.clone(),
                key.to_string(),
                settings.gemini.model.clone(),
                Duration::from_secs(settings.gemini.timeout_secs),
            )))
        }
        _ => {
            warn!("GEMINI_API_KEY is not configured; match requests will fail until it is set");
            None
        }
    };

    // Build application state
    let app_state = AppState { gemini };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
