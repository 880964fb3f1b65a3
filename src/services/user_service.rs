use crate::{
    database::MongoDB,
    models::{DeleteResponse, InsertResponse, UpdateResponse, UpsertUserRequest, User, UserResponse},
    utils::AppResult,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

pub async fn create_user(db: &MongoDB, user: User) -> AppResult<InsertResponse> {
    let result = db.users().insert_one(&user).await?;
    log::debug!("👤 Inserted user {}", user.email);
    Ok(result.into())
}

/// `$set` on the first document matching `email`, inserting it if absent
pub async fn upsert_user(
    db: &MongoDB,
    email: &str,
    fields: &UpsertUserRequest,
) -> AppResult<UpdateResponse> {
    let set = fields.to_set_document(email)?;
    let result = db
        .users()
        .update_one(doc! { "email": email }, doc! { "$set": set })
        .upsert(true)
        .await?;
    Ok(result.into())
}

pub async fn get_user(db: &MongoDB, email: &str) -> AppResult<Option<UserResponse>> {
    let user = db.users().find_one(doc! { "email": email }).await?;
    Ok(user.map(UserResponse::from))
}

pub async fn list_users(db: &MongoDB) -> AppResult<Vec<UserResponse>> {
    let users: Vec<User> = db.users().find(doc! {}).await?.try_collect().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn delete_user(db: &MongoDB, email: &str) -> AppResult<DeleteResponse> {
    let result = db.users().delete_one(doc! { "email": email }).await?;
    Ok(result.into())
}
