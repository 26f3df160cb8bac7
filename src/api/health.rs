use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "SneakPeek backend is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn root_reports_running() {
        let app = test::init_service(
            App::new().route("/", web::get().to(read_root)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: RootResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "SneakPeek backend is running");
    }
}
