use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::api::metrics::{add_products_served, increment_error_count, increment_request_count};
use crate::database::Store;
use crate::models::ShoeProduct;
use crate::services::catalog_service::{self, DEFAULT_LIMIT};
use crate::utils::AppError;

#[derive(Deserialize)]
pub struct ListProductsQuery {
    pub limit: Option<i64>,
}

fn error_response(error: &AppError) -> HttpResponse {
    increment_error_count();
    let body = serde_json::json!({
        "success": false,
        "error": error.to_string()
    });
    match error {
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
        AppError::StoreUnavailable | AppError::DatabaseError(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[utoipa::path(
    post,
    path = "/seed/shoes",
    tag = "Products",
    request_body = Vec<ShoeProduct>,
    responses(
        (status = 200, description = "Inserted count and generated identifiers"),
        (status = 400, description = "Payload fails schema constraints"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn seed_shoes(
    store: web::Data<Store>,
    payload: web::Json<Vec<ShoeProduct>>,
) -> HttpResponse {
    increment_request_count();
    log::info!("👟 POST /seed/shoes - {} products", payload.len());

    // Shape constraints are checked before any store interaction
    for item in payload.iter() {
        if let Err(e) = item.validate() {
            log::warn!("⚠️  Rejected seed payload: {}", e);
            return error_response(&e);
        }
    }

    match catalog_service::seed_shoes(&store, &payload).await {
        Ok(summary) => {
            log::info!("✅ Inserted {} products", summary.inserted);
            HttpResponse::Ok().json(serde_json::json!({
                "inserted": summary.inserted,
                "ids": summary.ids
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to seed products: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum records to return (default 20)")
    ),
    responses(
        (status = 200, description = "Product list with identifiers as strings"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn list_products(
    store: web::Data<Store>,
    query: web::Query<ListProductsQuery>,
) -> HttpResponse {
    increment_request_count();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    log::info!("👟 GET /products - limit {}", limit);

    match catalog_service::list_products(&store, limit).await {
        Ok(items) => {
            log::info!("✅ Returned {} products", items.len());
            add_products_served(items.len() as u64);
            HttpResponse::Ok().json(serde_json::json!({ "items": items }))
        }
        Err(e) => {
            log::error!("❌ Failed to list products: {}", e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/products/{slug}",
    tag = "Products",
    params(
        ("slug" = String, Path, description = "URL-friendly product identifier")
    ),
    responses(
        (status = 200, description = "The matching product, identifier as string"),
        (status = 404, description = "No product with this slug"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_product(store: web::Data<Store>, path: web::Path<String>) -> HttpResponse {
    increment_request_count();
    let slug = path.into_inner();
    log::info!("👟 GET /products/{}", slug);

    match catalog_service::get_product_by_slug(&store, &slug).await {
        Ok(product) => {
            add_products_served(1);
            HttpResponse::Ok().json(product)
        }
        Err(AppError::NotFound(msg)) => {
            log::warn!("⚠️  Product {} not found", slug);
            error_response(&AppError::NotFound(msg))
        }
        Err(e) => {
            log::error!("❌ Failed to fetch product {}: {}", slug, e);
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    async fn request_with_disabled_store(
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Store::disabled()))
                .route("/seed/shoes", web::post().to(seed_shoes))
                .route("/products", web::get().to(list_products))
                .route("/products/{slug}", web::get().to(get_product)),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    fn shoe_payload(rating: f64) -> serde_json::Value {
        serde_json::json!([{
            "title": "Test Shoe",
            "slug": "test-shoe",
            "brand": "TestBrand",
            "description": "test",
            "price": 99.0,
            "rating": rating
        }])
    }

    #[actix_web::test]
    async fn list_products_without_store_is_server_error() {
        let resp =
            request_with_disabled_store(test::TestRequest::get().uri("/products")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn get_product_without_store_is_server_error() {
        let resp = request_with_disabled_store(
            test::TestRequest::get().uri("/products/runner-x-shadow"),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn seed_without_store_is_server_error() {
        let resp = request_with_disabled_store(
            test::TestRequest::post()
                .uri("/seed/shoes")
                .set_json(shoe_payload(4.5)),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn seed_rejects_invalid_rating_before_store() {
        // Validation failure wins over store unavailability
        let resp = request_with_disabled_store(
            test::TestRequest::post()
                .uri("/seed/shoes")
                .set_json(shoe_payload(9.0)),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn seed_rejects_missing_fields() {
        let resp = request_with_disabled_store(
            test::TestRequest::post()
                .uri("/seed/shoes")
                .set_json(serde_json::json!([{ "title": "no slug" }])),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
