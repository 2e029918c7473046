use mongodb::{
    bson::doc,
    options::IndexOptions,
    Database, IndexModel,
};

pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    // users: unique email
    {
        let col = db.collection::<mongodb::bson::Document>("users");
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // budgets: at most one ceiling per (user_id, category, month)
    {
        let col = db.collection::<mongodb::bson::Document>("budgets");
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "category": 1, "month": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // alerts: at most one alert per (user_id, category, month, threshold).
    // insert_alert_if_absent relies on this index to stay idempotent under
    // concurrent transaction inserts; it must exist before serving traffic.
    {
        let col = db.collection::<mongodb::bson::Document>("alerts");
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "category": 1, "month": 1, "threshold": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // transactions: query by user and sort by date desc
    {
        let col = db.collection::<mongodb::bson::Document>("transactions");
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "date": -1 })
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // alerts: unread listing
    {
        let col = db.collection::<mongodb::bson::Document>("alerts");
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "is_read": 1, "created_at": -1 })
            .build();

        let _ = col.create_index(model, None).await;
    }

    // debts: query by user and sort by created_at desc
    {
        let col = db.collection::<mongodb::bson::Document>("debts");
        let model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build();

        let _ = col.create_index(model, None).await;
    }

    Ok(())
}
