use mongodb::bson::{doc, Bson, Document};
use serde::Serialize;

use crate::database::Store;
use crate::models::{ShoeProduct, SHOE_COLLECTION};
use crate::utils::AppError;

/// Default page size for product listings
pub const DEFAULT_LIMIT: i64 = 20;

#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub inserted: usize,
    pub ids: Vec<String>,
}

/// Replace a BSON ObjectId `_id` with its hex string so the native
/// identifier type never leaks into a response body.
fn stringify_id(mut document: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = document.get("_id") {
        let hex = oid.to_hex();
        document.insert("_id", hex);
    }
    document
}

/// Insert each payload item as a new catalog record. Slug uniqueness is
/// not checked — duplicate slugs are allowed, lookups take the first match.
pub async fn seed_shoes(
    store: &Store,
    items: &[ShoeProduct],
) -> Result<SeedSummary, AppError> {
    if !store.is_available() {
        return Err(AppError::StoreUnavailable);
    }

    let mut ids = Vec::with_capacity(items.len());

    for item in items {
        let document = mongodb::bson::to_document(item)
            .map_err(|e| AppError::InvalidRequest(format!("Unserializable payload: {}", e)))?;
        let id = store.insert_document(SHOE_COLLECTION, document).await?;
        ids.push(id);
    }

    Ok(SeedSummary {
        inserted: ids.len(),
        ids,
    })
}

pub async fn list_products(store: &Store, limit: i64) -> Result<Vec<Document>, AppError> {
    let documents = store
        .query_documents(SHOE_COLLECTION, doc! {}, limit)
        .await?;

    Ok(documents.into_iter().map(stringify_id).collect())
}

pub async fn get_product_by_slug(store: &Store, slug: &str) -> Result<Document, AppError> {
    let documents = store
        .query_documents(SHOE_COLLECTION, doc! { "slug": slug }, 1)
        .await?;

    documents
        .into_iter()
        .next()
        .map(stringify_id)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn stringify_id_replaces_object_id() {
        let oid = ObjectId::new();
        let document = stringify_id(doc! { "_id": oid, "slug": "x" });
        assert_eq!(document.get_str("_id").unwrap(), oid.to_hex());
    }

    #[test]
    fn stringify_id_leaves_plain_documents_alone() {
        let document = stringify_id(doc! { "slug": "x" });
        assert!(document.get("_id").is_none());
    }

    #[tokio::test]
    async fn operations_fail_when_store_disabled() {
        let store = Store::disabled();

        let listed = list_products(&store, DEFAULT_LIMIT).await;
        assert_eq!(listed.unwrap_err(), AppError::StoreUnavailable);

        let fetched = get_product_by_slug(&store, "runner-x-shadow").await;
        assert_eq!(fetched.unwrap_err(), AppError::StoreUnavailable);

        // Even an empty batch is rejected before touching any collection
        let seeded = seed_shoes(&store, &[]).await;
        assert_eq!(seeded.unwrap_err(), AppError::StoreUnavailable);
    }
}
