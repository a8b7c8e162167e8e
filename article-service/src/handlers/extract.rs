use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use service_core::error::AppError;

/// JSON body that must be an object. Rejections (bad syntax, arrays or
/// scalars, wrong field types, missing `Content-Type`) become 400 responses
/// in the shared error envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;

        // Derived `Deserialize` would otherwise fill struct fields from an array by position.
        if !value.is_object() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "invalid type: {}, expected a JSON object",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.to_string())))
    }
}

/// `axum::extract::Path` whose rejections use the shared error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
