use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,
    pub email: String,
    pub password_hash: String,

    pub created_at: i64,

    #[serde(default)]
    pub avatar_url: String,
}

/// The authenticated user injected into request extensions by the auth
/// middleware. Never carries the password hash.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

impl From<User> for CurrentUser {
    fn from(u: User) -> Self {
        CurrentUser {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
