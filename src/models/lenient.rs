//! Field deserializers for documents read back from the store.
//!
//! Old clients wrote whatever JSON they had, so a known field can hold the
//! wrong BSON type. Read-side helpers never fail: they coerce what they can
//! and fall back to empty. Request-side helpers accept numeric strings but
//! still reject garbage.

use mongodb::bson::Bson;
use serde::{de::Error, Deserialize, Deserializer};

fn as_number(value: &Bson) -> Option<f64> {
    let n = match value {
        Bson::Double(n) => *n,
        Bson::Int32(n) => f64::from(*n),
        Bson::Int64(n) => *n as f64,
        Bson::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn whole_i32(n: f64) -> Option<i32> {
    (n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX)).then_some(n as i32)
}

fn as_string(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) => Some(s.clone()),
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number or numeric string; anything else reads as `None`
pub fn stored_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Bson>::deserialize(deserializer)?.as_ref().and_then(as_number))
}

/// Whole number or numeric string; anything else reads as `None`
pub fn stored_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Bson>::deserialize(deserializer)?
        .as_ref()
        .and_then(as_number)
        .and_then(whole_i32))
}

/// Scalars rendered as text, ObjectIds as hex; anything else reads as `None`
pub fn stored_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Bson>::deserialize(deserializer)?.as_ref().and_then(as_string))
}

/// Like [`stored_opt_string`] but empty instead of `None`
pub fn stored_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(stored_opt_string(deserializer)?.unwrap_or_default())
}

/// A single label or an array of them; non-text entries are dropped
pub fn stored_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Bson>::deserialize(deserializer)? {
        Some(Bson::Array(items)) => items.iter().filter_map(as_string).collect(),
        Some(other) => as_string(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn request_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) if n.is_finite() => Ok(Some(n)),
        Some(NumberOrText::Number(n)) => Err(D::Error::custom(format!("{} is not a finite number", n))),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("'{}' is not a number", s))),
    }
}

/// Number or numeric string in a request body
pub fn request_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    request_number(deserializer)
}

/// Whole number or numeric string in a request body
pub fn request_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match request_number(deserializer)? {
        None => Ok(None),
        Some(n) => whole_i32(n)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{} is not a whole number", n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, oid::ObjectId};

    #[derive(Debug, Deserialize)]
    struct Stored {
        #[serde(default, deserialize_with = "stored_f64")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "stored_i32")]
        year: Option<i32>,
        #[serde(default, deserialize_with = "stored_string")]
        owner: String,
        #[serde(default, deserialize_with = "stored_labels")]
        tags: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Request {
        #[serde(default, deserialize_with = "request_f64")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "request_i32")]
        year: Option<i32>,
    }

    fn stored(document: bson::Document) -> Stored {
        bson::from_document(document).unwrap()
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let s = stored(doc! { "score": "8.3", "year": " 1995 " });
        assert_eq!(s.score, Some(8.3));
        assert_eq!(s.year, Some(1995));
    }

    #[test]
    fn test_native_numbers_of_any_width() {
        let s = stored(doc! { "score": 7_i64, "year": 1995.0 });
        assert_eq!(s.score, Some(7.0));
        assert_eq!(s.year, Some(1995));
    }

    #[test]
    fn test_garbage_reads_as_none() {
        let s = stored(doc! { "score": "great", "year": 1995.5, "owner": { "nested": true }, "tags": true });
        assert_eq!(s.score, None);
        assert_eq!(s.year, None);
        assert_eq!(s.owner, "");
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields() {
        let s = stored(doc! { "score": null });
        assert_eq!(s.score, None);
        assert_eq!(s.year, None);
        assert_eq!(s.owner, "");
    }

    #[test]
    fn test_object_id_owner_reads_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(stored(doc! { "owner": oid }).owner, oid.to_hex());
    }

    #[test]
    fn test_labels_single_or_mixed_array() {
        assert_eq!(stored(doc! { "tags": "Drama" }).tags, vec!["Drama"]);
        assert_eq!(
            stored(doc! { "tags": ["Drama", null, "Crime"] }).tags,
            vec!["Drama", "Crime"]
        );
    }

    #[test]
    fn test_request_accepts_numeric_strings() {
        let r: Request = serde_json::from_str(r#"{"score":"8.3","year":"1995"}"#).unwrap();
        assert_eq!(r.score, Some(8.3));
        assert_eq!(r.year, Some(1995));

        let r: Request = serde_json::from_str(r#"{"score":9,"year":2001}"#).unwrap();
        assert_eq!(r.score, Some(9.0));
        assert_eq!(r.year, Some(2001));
    }

    #[test]
    fn test_request_rejects_garbage() {
        assert!(serde_json::from_str::<Request>(r#"{"score":"great"}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"year":1995.5}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"year":true}"#).is_err());
    }
}
