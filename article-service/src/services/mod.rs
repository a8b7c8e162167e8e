pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::MongoArticleStore;
pub use memory::InMemoryArticleStore;
pub use metrics::{get_metrics, init_metrics, record_article_operation};
pub use store::ArticleStore;
