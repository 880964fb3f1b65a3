use crate::{
    database::MongoDB,
    models::{highest_rating, StatsResponse, AWARDS_WON},
    utils::AppResult,
};
use mongodb::bson::doc;

pub async fn get_stats(db: &MongoDB) -> AppResult<StatsResponse> {
    let total_movies = db.movies().count_documents(doc! {}).await?;
    let total_users = db.users().count_documents(doc! {}).await?;

    let top = db
        .movies()
        .find_one(doc! {})
        .sort(doc! { "rating": -1 })
        .await?;

    Ok(StatsResponse {
        total_movies,
        total_users,
        top_rated_movie: highest_rating(top.as_ref()),
        awards_won: AWARDS_WON,
    })
}
