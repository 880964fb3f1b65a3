use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MovieMaster Pro API",
        version = "1.0.0",
        description = "CRUD API over users, movies and watchlist entries.\n\n**Authentication:** none.\n\n**Features:**\n- User profiles keyed by email\n- Movie catalog with genre and rating filters\n- Per-user watchlists\n- Aggregate statistics"
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Users
        crate::api::users::create_user,
        crate::api::users::upsert_user,
        crate::api::users::get_user,
        crate::api::users::list_users,
        crate::api::users::delete_user,

        // Movies
        crate::api::movies::create_movie,
        crate::api::movies::list_movies,
        crate::api::movies::get_movie,
        crate::api::movies::update_movie,
        crate::api::movies::delete_movie,
        crate::api::movies::top_rated,
        crate::api::movies::my_collection,

        // Watchlist
        crate::api::watchlist::add_to_watchlist,
        crate::api::watchlist::get_watchlist,
        crate::api::watchlist::remove_from_watchlist,

        // Stats
        crate::api::stats::get_stats,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::CreateUserRequest,
            crate::models::UpsertUserRequest,
            crate::models::UserResponse,
            crate::models::CreateMovieRequest,
            crate::models::UpdateMovieRequest,
            crate::models::MovieResponse,
            crate::models::AddWatchlistRequest,
            crate::models::WatchlistItemResponse,
            crate::models::InsertResponse,
            crate::models::UpdateResponse,
            crate::models::DeleteResponse,
            crate::models::StatsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database connectivity."),
        (name = "Users", description = "User profiles, looked up by email."),
        (name = "Movies", description = "Movie catalog, filters, top rated and per-user collections."),
        (name = "Watchlist", description = "Movies a user wants to watch."),
        (name = "Stats", description = "Aggregate counts for the dashboard."),
    )
)]
pub struct ApiDoc;
