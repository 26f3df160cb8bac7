mod api;
mod database;
mod models;
mod seeds;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

    log::info!("🚀 Starting SneakPeek backend...");

    // Connect the store — an unreachable database leaves it disabled
    // instead of failing startup
    let store = database::Store::from_env().await;
    let store_data = web::Data::new(store.clone());

    // 🌱 Seed sample catalog (best-effort, skipped when populated)
    seeds::shoe_catalog_seed::seed_sample_shoes(&store).await;

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness & diagnostics
            .route("/", web::get().to(api::health::read_root))
            .route("/test", web::get().to(api::diagnostics::test_database))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Shoe catalog
            .route("/seed/shoes", web::post().to(api::products::seed_shoes))
            .route("/products", web::get().to(api::products::list_products))
            .route("/products/{slug}", web::get().to(api::products::get_product))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
