use crate::models::lenient::stored_string;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Entry of a user's watchlist. Neither reference is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "stored_string")]
    pub user_email: String,
    /// Hex string; older entries may hold a raw ObjectId
    #[serde(default, deserialize_with = "stored_string")]
    pub movie_id: String,
}

/// Body of `POST /watchlist`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddWatchlistRequest {
    pub user_email: String,
    pub movie_id: String,
}

impl From<AddWatchlistRequest> for WatchlistItem {
    fn from(req: AddWatchlistRequest) -> Self {
        WatchlistItem {
            id: None,
            user_email: req.user_email,
            movie_id: req.movie_id,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: String,
    pub movie_id: String,
}

impl From<WatchlistItem> for WatchlistItemResponse {
    fn from(item: WatchlistItem) -> Self {
        WatchlistItemResponse {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_email: item.user_email,
            movie_id: item.movie_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_uses_camel_case() {
        let body = r#"{"userEmail":"ana@example.com","movieId":"65a1f2c3d4e5f60718293a4b"}"#;
        let item = WatchlistItem::from(serde_json::from_str::<AddWatchlistRequest>(body).unwrap());
        assert_eq!(item.user_email, "ana@example.com");
        assert_eq!(item.movie_id, "65a1f2c3d4e5f60718293a4b");
    }

    #[test]
    fn test_stored_item_with_object_id_reference() {
        let movie = ObjectId::new();
        let stored = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "userEmail": "ana@example.com",
            "movieId": movie,
        };
        let item: WatchlistItem = mongodb::bson::from_document(stored).unwrap();
        assert_eq!(item.movie_id, movie.to_hex());
        assert_eq!(item.user_email, "ana@example.com");
    }

    #[test]
    fn test_add_request_requires_user_email() {
        let body = r#"{"movieId":"65a1f2c3d4e5f60718293a4b"}"#;
        assert!(serde_json::from_str::<AddWatchlistRequest>(body).is_err());
    }
}
