//! Store write outcomes, shaped like the driver acknowledgements clients already expect.

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

/// Hex for ObjectIds, relaxed extended JSON otherwise
fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertResponse {
    fn from(result: InsertOneResult) -> Self {
        InsertResponse {
            acknowledged: true,
            inserted_id: id_to_string(&result.inserted_id),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        let upserted_id = result.upserted_id.as_ref().map(id_to_string);
        UpdateResponse {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        DeleteResponse {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_object_id_rendered_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
    }

    #[test]
    fn test_non_object_ids() {
        assert_eq!(id_to_string(&Bson::String("custom".to_string())), "custom");
        assert_eq!(id_to_string(&Bson::Int32(42)), "42");
    }

    #[test]
    fn test_update_response_json_shape() {
        let response = UpdateResponse {
            acknowledged: true,
            matched_count: 1,
            modified_count: 1,
            upserted_count: 0,
            upserted_id: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["matchedCount"], 1);
        assert_eq!(json["modifiedCount"], 1);
        assert_eq!(json["upsertedCount"], 0);
        assert!(json["upsertedId"].is_null());
    }
}
