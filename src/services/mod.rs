pub mod movie_service;
pub mod stats_service;
pub mod user_service;
pub mod watchlist_service;
