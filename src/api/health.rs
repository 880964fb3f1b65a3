use crate::database::MongoDB;
use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

pub const BANNER: &str = "MovieMaster Pro Backend is running!";

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let (status, database) = match db.ping().await {
        Ok(()) => ("healthy", "connected".to_string()),
        Err(e) => {
            log::warn!("⚠️  Health check: database unreachable: {}", e);
            ("degraded", "unreachable".to_string())
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        service: "moviemaster-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        timestamp: chrono::Utc::now().timestamp(),
    };

    if status == "healthy" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
