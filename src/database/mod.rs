use mongodb::bson::{oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database};
use std::env;

use crate::utils::AppError;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool sizing
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Fail fast when the server is unreachable
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }
}

/// Shared store handle injected into every handler. Wraps an optional
/// connection: when `DATABASE_URL` is missing or the server is unreachable
/// the store runs disabled and every operation reports `StoreUnavailable`
/// instead of crashing the process.
#[derive(Clone)]
pub struct Store {
    inner: Option<MongoDB>,
}

impl Store {
    /// Connect using `DATABASE_URL` / `DATABASE_NAME`. Never fails the
    /// process — connection problems produce a disabled store.
    pub async fn from_env() -> Self {
        let uri = match env::var("DATABASE_URL") {
            Ok(uri) => uri,
            Err(_) => {
                log::warn!("⚠️  DATABASE_URL not set — store disabled");
                return Self::disabled();
            }
        };
        let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "sneakpeek".to_string());

        match MongoDB::connect(&uri, &db_name).await {
            Ok(db) => {
                log::info!("✅ MongoDB connected: {}", db.name());
                Self { inner: Some(db) }
            }
            Err(e) => {
                log::warn!("⚠️  MongoDB connection failed: {} — store disabled", e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn db(&self) -> Result<&MongoDB, AppError> {
        self.inner.as_ref().ok_or(AppError::StoreUnavailable)
    }

    pub fn database_name(&self) -> Option<&str> {
        self.inner.as_ref().map(|db| db.name())
    }

    /// Insert one document, returning the generated identifier as a string.
    pub async fn insert_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let db = self.db()?;
        let result = db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    /// Fetch up to `limit` documents matching an exact-field-equality
    /// filter (empty filter = match all), in natural order.
    pub async fn query_documents(
        &self,
        collection: &str,
        mut filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let db = self.db()?;

        // Identifiers returned by insert are hex strings; accept them back
        // as lookup filters.
        let id_filter = filter
            .get_str("_id")
            .ok()
            .and_then(|id| ObjectId::parse_str(id).ok());
        if let Some(oid) = id_filter {
            filter.insert("_id", oid);
        }

        let mut cursor = db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut documents = Vec::new();
        use futures::stream::StreamExt;

        while let Some(result) = cursor.next().await {
            match result {
                Ok(doc) => documents.push(doc),
                Err(e) => log::error!("❌ Error reading document: {}", e),
            }
        }

        Ok(documents)
    }

    pub async fn count_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<u64, AppError> {
        let db = self.db()?;
        db.collection::<Document>(collection)
            .count_documents(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let db = self.db()?;
        db.database()
            .list_collection_names()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn disabled_store_reports_unavailable() {
        let store = Store::disabled();
        assert!(!store.is_available());
        assert_eq!(store.database_name(), None);

        let insert = store.insert_document("shoeproduct", doc! { "slug": "x" }).await;
        assert_eq!(insert.unwrap_err(), AppError::StoreUnavailable);

        let query = store.query_documents("shoeproduct", doc! {}, 20).await;
        assert_eq!(query.unwrap_err(), AppError::StoreUnavailable);

        let count = store.count_documents("shoeproduct", doc! {}).await;
        assert_eq!(count.unwrap_err(), AppError::StoreUnavailable);

        let names = store.list_collection_names().await;
        assert_eq!(names.unwrap_err(), AppError::StoreUnavailable);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn store_connects_from_env() {
        dotenv::dotenv().ok();

        let store = Store::from_env().await;
        assert!(store.is_available());

        let id = store
            .insert_document("shoeproduct_test", doc! { "slug": "roundtrip" })
            .await
            .unwrap();

        // The returned identifier is accepted back as a lookup filter
        let found = store
            .query_documents("shoeproduct_test", doc! { "_id": &id }, 1)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_str("slug").unwrap(), "roundtrip");
    }
}
