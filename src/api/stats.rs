use crate::database::MongoDB;
use crate::models::StatsResponse;
use crate::services::stats_service;
use crate::utils::AppError;
use actix_web::{get, web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Collection counts and best rating", body = StatsResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/api/stats")]
pub async fn get_stats(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("📊 GET /api/stats");
    let stats = stats_service::get_stats(&db).await?;
    Ok(HttpResponse::Ok().json(stats))
}
