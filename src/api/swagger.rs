use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SneakPeek API",
        version = "1.0.0",
        description = "E-commerce Shoes Backend. \n\n**Features:**\n- Shoe catalog listing and slug lookups\n- Bulk catalog seeding\n- Store and environment diagnostics\n- Health monitoring and metrics",
        contact(
            name = "SneakPeek Team",
            email = "support@sneakpeek.dev"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::read_root,
        crate::api::metrics::get_metrics,

        // Diagnostics
        crate::api::diagnostics::test_database,

        // Products
        crate::api::products::seed_shoes,
        crate::api::products::list_products,
        crate::api::products::get_product,
    ),
    components(
        schemas(
            // Health & Metrics
            crate::api::health::RootResponse,
            crate::api::metrics::MetricsResponse,
            crate::api::diagnostics::DiagnosticsResponse,

            // Catalog schemas
            crate::models::ShoeProduct,
            crate::models::Color,
            crate::models::User,
            crate::models::Product,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and system metrics endpoints for monitoring service status."),
        (name = "Diagnostics", description = "Best-effort store availability and environment configuration report."),
        (name = "Products", description = "Shoe catalog endpoints. Seed, list, and look up products by slug.")
    )
)]
pub struct ApiDoc;
