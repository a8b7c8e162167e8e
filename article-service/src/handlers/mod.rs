pub mod articles;
pub mod extract;
pub mod health;

pub use articles::{create_article, get_article, parse_article_id, update_article};
pub use extract::{JsonBody, PathParam};
pub use health::{health_check, metrics_endpoint, readiness_check};
