use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::env;

use crate::database::Store;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
    pub timestamp: i64,
}

/// Keep fault descriptions short enough for a status field
fn truncate_error(message: &str) -> String {
    message.chars().take(50).collect()
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Store availability and environment configuration", body = DiagnosticsResponse)
    )
)]
pub async fn test_database(store: web::Data<Store>) -> impl Responder {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: "❌ Not Set".to_string(),
        database_name: "❌ Not Set".to_string(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if store.is_available() {
        response.database = "✅ Available".to_string();
        response.connection_status = "Connected".to_string();

        // Listing collections can still fail after a successful connect;
        // report it as a degraded status string, never an error response.
        match store.list_collection_names().await {
            Ok(collections) => {
                response.collections = collections.into_iter().take(10).collect();
                response.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                response.database =
                    format!("⚠️  Connected but Error: {}", truncate_error(&e.to_string()));
            }
        }
    }

    response.database_url = if env::var("DATABASE_URL").is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    };
    response.database_name = if env::var("DATABASE_NAME").is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn diagnostics_never_fail_without_store() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Store::disabled()))
                .route("/test", web::get().to(test_database)),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: DiagnosticsResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.backend, "✅ Running");
        assert_eq!(body.database, "❌ Not Available");
        assert_eq!(body.connection_status, "Not Connected");
        assert!(body.collections.is_empty());
    }

    #[::core::prelude::v1::test]
    fn long_faults_are_truncated() {
        let truncated = truncate_error(&"x".repeat(200));
        assert_eq!(truncated.len(), 50);
    }
}
