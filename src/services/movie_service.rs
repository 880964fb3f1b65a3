use crate::{
    database::MongoDB,
    models::{
        DeleteResponse, InsertResponse, Movie, MovieQuery, MovieResponse, UpdateMovieRequest,
        UpdateResponse,
    },
    utils::{parse_object_id, AppResult},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

pub const TOP_RATED_LIMIT: i64 = 6;

async fn find_movies(db: &MongoDB, filter: Document) -> AppResult<Vec<MovieResponse>> {
    let movies: Vec<Movie> = db.movies().find(filter).await?.try_collect().await?;
    Ok(movies.into_iter().map(MovieResponse::from).collect())
}

pub async fn create_movie(db: &MongoDB, movie: Movie) -> AppResult<InsertResponse> {
    let result = db.movies().insert_one(&movie).await?;
    log::debug!("🎬 Inserted movie '{}'", movie.title);
    Ok(result.into())
}

pub async fn list_movies(db: &MongoDB, query: &MovieQuery) -> AppResult<Vec<MovieResponse>> {
    let filter = query.to_filter()?;
    log::debug!("🔎 Movie filter: {}", filter);
    find_movies(db, filter).await
}

pub async fn get_movie(db: &MongoDB, id: &str) -> AppResult<Option<MovieResponse>> {
    let oid = parse_object_id(id)?;
    let movie = db.movies().find_one(doc! { "_id": oid }).await?;
    Ok(movie.map(MovieResponse::from))
}

pub async fn update_movie(
    db: &MongoDB,
    id: &str,
    fields: &UpdateMovieRequest,
) -> AppResult<UpdateResponse> {
    let oid = parse_object_id(id)?;
    let set = fields.to_set_document()?;
    let result = db
        .movies()
        .update_one(doc! { "_id": oid }, doc! { "$set": set })
        .await?;
    Ok(result.into())
}

pub async fn delete_movie(db: &MongoDB, id: &str) -> AppResult<DeleteResponse> {
    let oid = parse_object_id(id)?;
    let result = db.movies().delete_one(doc! { "_id": oid }).await?;
    Ok(result.into())
}

/// Best six by rating; order among equal ratings is whatever the store returns
pub async fn top_rated(db: &MongoDB) -> AppResult<Vec<MovieResponse>> {
    let movies: Vec<Movie> = db
        .movies()
        .find(doc! {})
        .sort(doc! { "rating": -1 })
        .limit(TOP_RATED_LIMIT)
        .await?
        .try_collect()
        .await?;
    Ok(movies.into_iter().map(MovieResponse::from).collect())
}

pub async fn movies_added_by(db: &MongoDB, email: &str) -> AppResult<Vec<MovieResponse>> {
    find_movies(db, doc! { "addedBy": email }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::{drop_database, live_database, offline_database};
    use crate::utils::AppError;

    fn movie(title: &str, genre: &[&str], rating: f64, added_by: &str) -> Movie {
        Movie {
            id: None,
            title: title.to_string(),
            genre: genre.iter().map(|g| g.to_string()).collect(),
            release_year: None,
            director: None,
            cast: vec![],
            rating: Some(rating),
            duration: None,
            plot_summary: None,
            poster_url: None,
            language: None,
            country: None,
            added_by: Some(added_by.to_string()),
        }
    }

    async fn seed(db: &MongoDB) {
        let movies = [
            movie("Heat", &["Crime", "Drama"], 8.3, "ana@example.com"),
            movie("Mad Max: Fury Road", &["Action"], 8.1, "ana@example.com"),
            movie("Paddington 2", &["Comedy"], 7.8, "bia@example.com"),
            movie("The Room", &["Drama"], 3.6, "bia@example.com"),
            movie("Alien", &["Horror", "Sci-Fi"], 8.5, "caio@example.com"),
            movie("Arrival", &["Sci-Fi", "Drama"], 7.9, "caio@example.com"),
            movie("Cats", &["Musical"], 2.8, "caio@example.com"),
            movie("Parasite", &["Thriller", "Drama"], 8.5, "ana@example.com"),
        ];
        for m in movies {
            create_movie(db, m).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_malformed_id_fails_before_store() {
        let db = offline_database().await;
        assert!(matches!(get_movie(&db, "not-an-id").await, Err(AppError::InvalidId(_))));
        assert!(matches!(delete_movie(&db, "123").await, Err(AppError::InvalidId(_))));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_rating_range_is_inclusive_and_open_ended() {
        let db = live_database("movie_rating").await;
        seed(&db).await;

        let query = MovieQuery {
            min_rating: Some("7".to_string()),
            max_rating: Some("8.3".to_string()),
            ..Default::default()
        };
        let found = list_movies(&db, &query).await.unwrap();
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|m| (7.0..=8.3).contains(&m.rating.unwrap())));

        let max_only = MovieQuery {
            max_rating: Some("4".to_string()),
            ..Default::default()
        };
        assert_eq!(list_movies(&db, &max_only).await.unwrap().len(), 2);

        drop_database(db).await;
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_genre_filter_matches_any_listed_genre() {
        let db = live_database("movie_genre").await;
        seed(&db).await;

        let query = MovieQuery {
            genre: Some("Action,Comedy".to_string()),
            ..Default::default()
        };
        let mut titles: Vec<String> = list_movies(&db, &query)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Mad Max: Fury Road", "Paddington 2"]);

        drop_database(db).await;
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_top_rated_is_capped_and_sorted() {
        let db = live_database("movie_top").await;
        seed(&db).await;

        let top = top_rated(&db).await.unwrap();
        assert_eq!(top.len(), 6);
        let ratings: Vec<f64> = top.iter().map(|m| m.rating.unwrap()).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ratings[0], 8.5);

        drop_database(db).await;
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_get_delete_by_id() {
        let db = live_database("movie_crud").await;

        let inserted = create_movie(&db, movie("Heat", &["Crime"], 8.3, "ana@example.com"))
            .await
            .unwrap();
        let id = inserted.inserted_id;

        let update = UpdateMovieRequest {
            rating: Some(9.0),
            ..Default::default()
        };
        let updated = update_movie(&db, &id, &update).await.unwrap();
        assert_eq!(updated.matched_count, 1);
        assert_eq!(updated.modified_count, 1);

        let fetched = get_movie(&db, &id).await.unwrap().unwrap();
        assert_eq!(fetched.rating, Some(9.0));
        assert_eq!(fetched.title, "Heat");

        assert_eq!(movies_added_by(&db, "ana@example.com").await.unwrap().len(), 1);
        assert!(movies_added_by(&db, "bia@example.com").await.unwrap().is_empty());

        assert_eq!(delete_movie(&db, &id).await.unwrap().deleted_count, 1);
        assert!(get_movie(&db, &id).await.unwrap().is_none());

        drop_database(db).await;
    }
}
