use crate::utils::{AppError, AppResult};
use mongodb::bson::{self, oid::ObjectId, Document};
use crate::models::lenient::{stored_opt_string, stored_string};
use serde::{Deserialize, Serialize};

/// User profile as stored in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Lookup key for every user route; empty when a stored document lacks it
    #[serde(default, deserialize_with = "stored_string")]
    pub email: String,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        rename = "photoURL",
        default,
        deserialize_with = "stored_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
}

/// Body of `POST /users`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: None,
            email: req.email,
            name: req.name,
            photo_url: req.photo_url,
        }
    }
}

/// Body of `PUT /users/{email}`; only supplied fields are written
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpsertUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl UpsertUserRequest {
    /// `$set` payload keyed by the path email, which always wins
    pub fn to_set_document(&self, email: &str) -> AppResult<Document> {
        if let Some(body_email) = &self.email {
            if body_email != email {
                return Err(AppError::InvalidRequest(format!(
                    "Body email '{}' does not match path email '{}'",
                    body_email, email
                )));
            }
        }

        let mut set = bson::to_document(self)
            .map_err(|e| AppError::InvalidRequest(format!("Invalid user fields: {}", e)))?;
        set.insert("email", email);
        Ok(set)
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            name: user.name,
            photo_url: user.photo_url,
        }
    }
}
