use crate::database::MongoDB;
use crate::models::{
    CreateMovieRequest, DeleteResponse, InsertResponse, MovieQuery, MovieResponse,
    UpdateMovieRequest, UpdateResponse,
};
use crate::services::movie_service;
use crate::utils::AppError;
use actix_web::{delete, get, post, put, web, HttpResponse};

#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie inserted", body = InsertResponse),
        (status = 400, description = "Malformed body")
    )
)]
#[post("/movies")]
pub async fn create_movie(
    db: web::Data<MongoDB>,
    body: web::Json<CreateMovieRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🎬 POST /movies - '{}'", body.title);
    let result = movie_service::create_movie(&db, body.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    params(MovieQuery),
    responses(
        (status = 200, description = "Movies matching the filters", body = Vec<MovieResponse>),
        (status = 400, description = "Rating bound is not a number")
    )
)]
#[get("/movies")]
pub async fn list_movies(
    db: web::Data<MongoDB>,
    query: web::Query<MovieQuery>,
) -> Result<HttpResponse, AppError> {
    log::info!("🎬 GET /movies - {:?}", query);
    let movies = movie_service::list_movies(&db, &query).await?;
    log::info!("✅ Movies retrieved: {}", movies.len());
    Ok(HttpResponse::Ok().json(movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    responses(
        (status = 200, description = "The movie, or null when absent", body = MovieResponse),
        (status = 400, description = "Malformed id")
    )
)]
#[get("/movies/{id}")]
pub async fn get_movie(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🎬 GET /movies/{}", id);
    let movie = movie_service::get_movie(&db, &id).await?;
    Ok(HttpResponse::Ok().json(movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Update outcome", body = UpdateResponse),
        (status = 400, description = "Malformed id or empty update")
    )
)]
#[put("/movies/{id}")]
pub async fn update_movie(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdateMovieRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🎬 PUT /movies/{}", id);
    let result = movie_service::update_movie(&db, &id, &body).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "Movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 400, description = "Malformed id")
    )
)]
#[delete("/movies/{id}")]
pub async fn delete_movie(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /movies/{}", id);
    let result = movie_service::delete_movie(&db, &id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/top-rated",
    tag = "Movies",
    responses(
        (status = 200, description = "Up to six movies, best rated first", body = Vec<MovieResponse>)
    )
)]
#[get("/top-rated")]
pub async fn top_rated(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("🏆 GET /top-rated");
    let movies = movie_service::top_rated(&db).await?;
    Ok(HttpResponse::Ok().json(movies))
}

#[utoipa::path(
    get,
    path = "/my-collection/{email}",
    tag = "Movies",
    params(("email" = String, Path, description = "Owner email")),
    responses(
        (status = 200, description = "Movies added by the user", body = Vec<MovieResponse>)
    )
)]
#[get("/my-collection/{email}")]
pub async fn my_collection(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let email = path.into_inner();
    log::info!("📁 GET /my-collection/{}", email);
    let movies = movie_service::movies_added_by(&db, &email).await?;
    log::info!("✅ {} movies added by {}", movies.len(), email);
    Ok(HttpResponse::Ok().json(movies))
}
