pub mod articles;

pub use articles::{ArticleRequest, ArticleResponse, CreatedResponse, UpdatedResponse};
