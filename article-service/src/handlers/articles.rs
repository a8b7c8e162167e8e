use crate::dtos::{ArticleRequest, ArticleResponse, CreatedResponse, UpdatedResponse};
use crate::handlers::extract::{JsonBody, PathParam};
use crate::services::record_article_operation;
use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Parse a path identifier into an `ObjectId`. Runs before any store access.
pub fn parse_article_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|e| {
        tracing::debug!(article_id = %raw, "Rejected malformed article id");
        AppError::BadRequest(anyhow::anyhow!(e.to_string()))
    })
}

/// Create a new article.
///
/// POST /post
pub async fn create_article(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ArticleRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let result = state.store.insert(req.into()).await;
    record_article_operation("create", &result);
    let id = result?;

    tracing::info!(article_id = %id, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

/// Get article by ID.
///
/// GET /novel/:id
pub async fn get_article(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<ArticleResponse>, AppError> {
    let id = parse_article_id(&id)?;

    let result = state.store.find_by_id(id).await.and_then(|found| {
        found.ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Article not found")))
    });
    record_article_operation("get", &result);

    Ok(Json(ArticleResponse::from(result?)))
}

/// Overwrite title, author and content of an article.
///
/// PUT /novel/:id
pub async fn update_article(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    JsonBody(req): JsonBody<ArticleRequest>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let id = parse_article_id(&id)?;

    let result = state
        .store
        .update_by_id(id, req.into())
        .await
        .and_then(|matched| {
            if matched {
                Ok(())
            } else {
                Err(AppError::NotFound(anyhow::anyhow!("Article not found")))
            }
        });
    record_article_operation("update", &result);
    result?;

    tracing::info!(article_id = %id, "Article updated");

    Ok(Json(UpdatedResponse::updated()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hex_identifier() {
        let id = parse_article_id("65a1b2c3d4e5f60718293a4b").unwrap();
        assert_eq!(id.to_hex(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for raw in ["not-a-valid-id", "", "65a1b2c3d4e5f60718293a4", "zza1b2c3d4e5f60718293a4b"] {
            let err = parse_article_id(raw).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "id {:?}", raw);
        }
    }
}
