use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::{models::User, AppState};

use super::auth_service::FieldErrors;

pub async fn get_user(state: &AppState, user_id: ObjectId) -> Result<Option<User>, String> {
    let users = state.db.collection::<User>("users");
    users
        .find_one(doc! { "_id": user_id }, None)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_profile(
    state: &AppState,
    user_id: ObjectId,
    name: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<User, FieldErrors> {
    let mut errs = FieldErrors::new();

    let mut set = Document::new();
    if let Some(n) = name {
        let n = n.trim();
        if n.is_empty() {
            errs.insert("name".into(), "Name cannot be empty.".into());
        } else {
            set.insert("name", n);
        }
    }
    if let Some(url) = avatar_url {
        set.insert("avatar_url", url.trim());
    }

    if !errs.is_empty() {
        return Err(errs);
    }
    if set.is_empty() {
        errs.insert("profile".into(), "Nothing to update.".into());
        return Err(errs);
    }

    let users = state.db.collection::<User>("users");

    let opts = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    match users
        .find_one_and_update(doc! { "_id": user_id }, doc! { "$set": set }, opts)
        .await
    {
        Ok(Some(u)) => Ok(u),
        Ok(None) => {
            errs.insert("_form".into(), "User not found.".into());
            Err(errs)
        }
        Err(e) => {
            errs.insert("_form".into(), format!("db error: {e}"));
            Err(errs)
        }
    }
}
