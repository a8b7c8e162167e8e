use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A persisted article. `id` is assigned by the store on insert and never
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

/// The client-writable part of an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Article {
    pub fn new(id: ObjectId, fields: ArticleFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
        }
    }

    /// Overwrite every writable field, empty values included.
    pub fn apply(&mut self, fields: ArticleFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.author = fields.author;
    }
}

impl ArticleFields {
    /// Body of the `$set` operator used by updates. `_id` is never part of it.
    pub fn to_set_document(&self) -> Document {
        doc! {
            "title": self.title.as_str(),
            "content": self.content.as_str(),
            "author": self.author.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> ArticleFields {
        ArticleFields {
            title: title.to_string(),
            content: "C1".to_string(),
            author: "A1".to_string(),
        }
    }

    #[test]
    fn apply_overwrites_with_empty_values() {
        let mut article = Article::new(ObjectId::new(), fields("T1"));
        let id = article.id;

        article.apply(ArticleFields::default());

        assert_eq!(article.id, id);
        assert!(article.title.is_empty());
        assert!(article.content.is_empty());
        assert!(article.author.is_empty());
    }

    #[test]
    fn set_document_excludes_id() {
        let set = fields("T2").to_set_document();

        assert!(!set.contains_key("_id"));
        assert_eq!(set.get_str("title").unwrap(), "T2");
        assert_eq!(set.get_str("author").unwrap(), "A1");
        assert_eq!(set.get_str("content").unwrap(), "C1");
    }

    #[test]
    fn missing_stored_fields_default_to_empty() {
        let id = ObjectId::new();
        let stored = doc! { "_id": id, "title": "only title" };

        let article: Article = mongodb::bson::from_document(stored).unwrap();

        assert_eq!(article.id, id);
        assert_eq!(article.title, "only title");
        assert!(article.author.is_empty());
    }
}
