use crate::models::{Article, ArticleFields};
use crate::services::store::ArticleStore;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoArticleStore {
    client: MongoClient,
    articles: Collection<Article>,
}

impl MongoArticleStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let articles = client.database(database).collection(collection);
        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB database"
        );
        Ok(Self { client, articles })
    }

    pub fn articles(&self) -> &Collection<Article> {
        &self.articles
    }
}

#[async_trait]
impl ArticleStore for MongoArticleStore {
    async fn insert(&self, fields: ArticleFields) -> Result<ObjectId, AppError> {
        // Inserted without `_id` so the driver assigns one.
        let result = self
            .articles
            .clone_with_type::<ArticleFields>()
            .insert_one(&fields, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert article: {}", e);
                AppError::from(e)
            })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        self.articles
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(article_id = %id, "Failed to find article: {}", e);
                AppError::from(e)
            })
    }

    async fn update_by_id(&self, id: ObjectId, fields: ArticleFields) -> Result<bool, AppError> {
        let result = self
            .articles
            .update_one(
                doc! { "_id": id },
                doc! { "$set": fields.to_set_document() },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!(article_id = %id, "Failed to update article: {}", e);
                AppError::from(e)
            })?;

        Ok(result.matched_count > 0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn close(&self) -> Result<(), AppError> {
        tracing::info!("Disconnecting from MongoDB");
        self.client.clone().shutdown().await;
        Ok(())
    }
}
