pub mod health;
pub mod movies;
pub mod stats;
pub mod swagger;
pub mod users;
pub mod watchlist;

use crate::utils::AppError;
use actix_cors::Cors;
use actix_web::web;

/// Any origin, any request header; preflight answers are cached for an hour
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

/// Registers every route plus extractor configs that turn bad input into `AppError`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into()),
    )
    // Health
    .service(health::root)
    .service(health::health_check)
    // Users
    .service(users::create_user)
    .service(users::list_users)
    .service(users::upsert_user)
    .service(users::get_user)
    .service(users::delete_user)
    // Movies
    .service(movies::create_movie)
    .service(movies::list_movies)
    .service(movies::top_rated)
    .service(movies::my_collection)
    .service(movies::get_movie)
    .service(movies::update_movie)
    .service(movies::delete_movie)
    // Watchlist
    .service(watchlist::add_to_watchlist)
    .service(watchlist::get_watchlist)
    .service(watchlist::remove_from_watchlist)
    // Stats
    .service(stats::get_stats);
}
