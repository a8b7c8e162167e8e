use crate::models::{Article, ArticleFields};
use crate::services::store::ArticleStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local article store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    articles: Arc<RwLock<HashMap<ObjectId, Article>>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, fields: ArticleFields) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        self.articles
            .write()
            .await
            .insert(id, Article::new(id, fields));
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn update_by_id(&self, id: ObjectId, fields: ArticleFields) -> Result<bool, AppError> {
        match self.articles.write().await.get_mut(&id) {
            Some(article) => {
                article.apply(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
