use crate::database::MongoDB;
use crate::models::{
    CreateUserRequest, DeleteResponse, InsertResponse, UpdateResponse, UpsertUserRequest,
    UserResponse,
};
use crate::services::user_service;
use crate::utils::AppError;
use actix_web::{delete, get, post, put, web, HttpResponse};

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User inserted", body = InsertResponse),
        (status = 400, description = "Malformed body")
    )
)]
#[post("/users")]
pub async fn create_user(
    db: web::Data<MongoDB>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 POST /users - {}", body.email);
    let result = user_service::create_user(&db, body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    put,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User updated or inserted", body = UpdateResponse),
        (status = 400, description = "Malformed body or email mismatch")
    )
)]
#[put("/users/{email}")]
pub async fn upsert_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpsertUserRequest>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("👤 PUT /users/{} - Upserting user", email);
    let result = user_service::upsert_user(&db, &email, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "The user, or null when absent", body = UserResponse)
    )
)]
#[get("/users/{email}")]
pub async fn get_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("👤 GET /users/{}", email);
    let user = user_service::get_user(&db, &email).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
#[get("/users")]
pub async fn list_users(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /users - Listing all users");
    let users = user_service::list_users(&db).await?;
    log::info!("✅ Users retrieved: {}", users.len());
    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    delete,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse)
    )
)]
#[delete("/users/{email}")]
pub async fn delete_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("🗑️ DELETE /users/{}", email);
    let result = user_service::delete_user(&db, &email).await?;
    Ok(HttpResponse::Ok().json(result))
}
