use crate::database::MongoDB;
use crate::models::{AddWatchlistRequest, DeleteResponse, InsertResponse, WatchlistItemResponse};
use crate::services::watchlist_service;
use crate::utils::AppError;
use actix_web::{delete, get, post, web, HttpResponse};

#[utoipa::path(
    post,
    path = "/watchlist",
    tag = "Watchlist",
    request_body = AddWatchlistRequest,
    responses(
        (status = 200, description = "Item inserted", body = InsertResponse),
        (status = 400, description = "Malformed body")
    )
)]
#[post("/watchlist")]
pub async fn add_to_watchlist(
    db: web::Data<MongoDB>,
    body: web::Json<AddWatchlistRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🎞️ POST /watchlist - {}", body.user_email);
    let result = watchlist_service::add_to_watchlist(&db, body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/watchlist/{email}",
    tag = "Watchlist",
    params(("email" = String, Path, description = "Owner email")),
    responses(
        (status = 200, description = "The user's watchlist", body = Vec<WatchlistItemResponse>)
    )
)]
#[get("/watchlist/{email}")]
pub async fn get_watchlist(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("🎞️ GET /watchlist/{}", email);
    let items = watchlist_service::get_watchlist(&db, &email).await?;
    Ok(HttpResponse::Ok().json(items))
}

#[utoipa::path(
    delete,
    path = "/watchlist/{id}",
    tag = "Watchlist",
    params(("id" = String, Path, description = "Watchlist item ObjectId")),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Malformed id")
    )
)]
#[delete("/watchlist/{id}")]
pub async fn remove_from_watchlist(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /watchlist/{}", id);
    let result = watchlist_service::remove_from_watchlist(&db, &id).await?;
    Ok(HttpResponse::Ok().json(result))
}
