mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env().map_err(|e| io::Error::other(e.to_string()))?;

    log::info!("🚀 Starting MovieMaster Service...");
    log::info!("📊 Database: {} ({})", config.redacted_uri(), config.db_name);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config).await.map_err(|e| {
        log::error!("❌ Failed to connect to MongoDB: {}", e);
        io::Error::other(e.to_string())
    })?;

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", bind_address);

    let openapi = api::swagger::ApiDoc::openapi();

    // Start HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .wrap(api::cors())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind(&bind_address)?
    .run()
    .await;

    // Server stopped (signal or error): release the pool either way
    db.shutdown().await;
    log::info!("👋 MovieMaster Service stopped");

    server
}
