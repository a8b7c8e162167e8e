use crate::models::{Article, ArticleFields};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence seam for articles. Handlers only ever see this trait, so the
/// backing store can be swapped (MongoDB in production, memory in tests).
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Persist a new article and return the identifier the store assigned.
    async fn insert(&self, fields: ArticleFields) -> Result<ObjectId, AppError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError>;

    /// Overwrite the writable fields of `id`. Returns `false` when nothing matched.
    async fn update_by_id(&self, id: ObjectId, fields: ArticleFields) -> Result<bool, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release connections. Called once on shutdown.
    async fn close(&self) -> Result<(), AppError> {
        Ok(())
    }
}
