use crate::{
    database::MongoDB,
    models::{DeleteResponse, InsertResponse, WatchlistItem, WatchlistItemResponse},
    utils::{parse_object_id, AppResult},
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

pub async fn add_to_watchlist(db: &MongoDB, item: WatchlistItem) -> AppResult<InsertResponse> {
    let result = db.watchlist().insert_one(&item).await?;
    log::debug!("🎞️ {} saved movie {}", item.user_email, item.movie_id);
    Ok(result.into())
}

pub async fn get_watchlist(db: &MongoDB, email: &str) -> AppResult<Vec<WatchlistItemResponse>> {
    let items: Vec<WatchlistItem> = db
        .watchlist()
        .find(doc! { "userEmail": email })
        .await?
        .try_collect()
        .await?;
    Ok(items.into_iter().map(WatchlistItemResponse::from).collect())
}

pub async fn remove_from_watchlist(db: &MongoDB, id: &str) -> AppResult<DeleteResponse> {
    let oid = parse_object_id(id)?;
    let result = db.watchlist().delete_one(doc! { "_id": oid }).await?;
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing::{drop_database, live_database};

    fn item(email: &str, movie_id: &str) -> WatchlistItem {
        WatchlistItem {
            id: None,
            user_email: email.to_string(),
            movie_id: movie_id.to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_remove_only_touches_one_item() {
        let db = live_database("watchlist").await;

        let first = add_to_watchlist(&db, item("ana@example.com", "65a1f2c3d4e5f60718293a4b"))
            .await
            .unwrap();
        add_to_watchlist(&db, item("ana@example.com", "65a1f2c3d4e5f60718293a4c"))
            .await
            .unwrap();
        add_to_watchlist(&db, item("bia@example.com", "65a1f2c3d4e5f60718293a4b"))
            .await
            .unwrap();

        assert_eq!(get_watchlist(&db, "ana@example.com").await.unwrap().len(), 2);

        let removed = remove_from_watchlist(&db, &first.inserted_id).await.unwrap();
        assert_eq!(removed.deleted_count, 1);

        let remaining = get_watchlist(&db, "ana@example.com").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].movie_id, "65a1f2c3d4e5f60718293a4c");
        assert_eq!(get_watchlist(&db, "bia@example.com").await.unwrap().len(), 1);

        drop_database(db).await;
    }
}
