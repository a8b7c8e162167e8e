use crate::models::{Article, ArticleFields};
use serde::{Deserialize, Serialize};

/// Body accepted by create and update. Omitted fields decode as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl From<ArticleRequest> for ArticleFields {
    fn from(req: ArticleRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            author: req.author,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_hex(),
            title: article.title,
            author: article.author,
            content: article.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub status: String,
}

impl UpdatedResponse {
    pub fn updated() -> Self {
        Self {
            status: "updated".to_string(),
        }
    }
}
