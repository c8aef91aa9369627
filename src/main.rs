mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;
mod views;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use handlers::health::not_found;
use routes::api;
use services::{EarningsService, InsightService, SearchProvider, TipsService, YtDlpSearchService};

#[derive(Clone)]
pub struct AppState {
    pub insight_service: InsightService,
    pub earnings_service: EarningsService,
    pub tips_service: TipsService,
    /// Filled in by the startup probe once the provider answers.
    pub provider_version: Arc<RwLock<Option<String>>>,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            insight_service: InsightService::new(provider, config.search.clone()),
            earnings_service: EarningsService::new(config.earnings.default_cpm),
            tips_service: TipsService,
            provider_version: Arc::new(RwLock::new(None)),
            config,
            start_time: Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting creator insights dashboard on port {}",
        config.server.port
    );

    let provider: Arc<dyn SearchProvider> = Arc::new(YtDlpSearchService::new(&config.search));
    let state = AppState::new(config.clone(), provider);

    // Probe the search provider in background
    let probe = state.insight_service.provider();
    let provider_version = state.provider_version.clone();
    let binary = config.search.binary.clone();
    tokio::spawn(async move {
        match probe.version().await {
            Ok(version) => {
                info!(%binary, %version, "Search provider available");
                *provider_version.write().await = Some(version);
            }
            Err(e) => warn!(%binary, "Search provider probe failed: {}", e),
        }
    });

    // Create HTTP server
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .route("/", web::get().to(handlers::index))
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
