use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use redis::aio::ConnectionManager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use welcome_service::handlers::events::register_routes;
use welcome_service::{Config, EventDispatcher, EventProcessor, HttpPushClient, RedisStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting welcome service");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?;

    let redis_client = redis::Client::open(config.store.redis_url.clone())
        .context("failed to parse REDIS_URL connection string")?;
    let redis_conn = ConnectionManager::new(redis_client)
        .await
        .context("failed to connect to Redis")?;
    tracing::info!("Successfully connected to record store");

    let store = Arc::new(RedisStore::new(redis_conn, config.store.key_prefix.clone()));
    let push_client = Arc::new(HttpPushClient::new(config.push.backend_url.clone()));

    let processor = Arc::new(EventProcessor::new(
        store,
        push_client,
        config.push.sender.clone(),
        config.push.service_name.clone(),
        config.store.record_ttl_secs,
    ));
    let dispatcher = Arc::new(EventDispatcher::new(processor));

    let addr = format!("0.0.0.0:{}", config.app.port);
    tracing::info!("Starting HTTP server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(dispatcher.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(register_routes)
    })
    .bind(&addr)?
    .run()
    .await
    .context("HTTP server failed")
}
