use crate::utils::{AppError, AppResult};
use mongodb::bson::oid::ObjectId;

/// Parses a path segment into an ObjectId, rejecting anything that isn't 24 hex chars
pub fn parse_object_id(raw: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw.trim()).map_err(|_| AppError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_id() {
        let id = parse_object_id("65a1f2c3d4e5f60718293a4b").unwrap();
        assert_eq!(id.to_hex(), "65a1f2c3d4e5f60718293a4b");
    }

    #[test]
    fn test_rejects_malformed_ids() {
        for raw in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "65a1f2c3d4e5f60718293a4b00"] {
            assert!(matches!(parse_object_id(raw), Err(AppError::InvalidId(_))), "{raw}");
        }
    }
}
