//! Request extractors.
//!
//! [`ValidatedJson`] and [`ValidatedPath`] behave like `axum::Json` and
//! `axum::extract::Path` but reject with [`ApiError`], so a missing required
//! key, a malformed body or an unparseable path segment gets the same error
//! shape as every other client mistake.
//!
//! # Example
//!
//! ```ignore
//! async fn adjust(ValidatedJson(req): ValidatedJson<AdjustTrafficRequest>) -> impl IntoResponse {
//!     // `req.traffic_length` is guaranteed to be present here
//! }
//!
//! async fn simulate(ValidatedPath(length): ValidatedPath<TrafficLength>) -> impl IntoResponse {
//!     // `length` is a finite number of kilometers
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// JSON body extractor with [`ApiError`] rejections.
///
/// The body must be a JSON object. Arrays and scalars are rejected before
/// deserialization, so fields are only ever filled by key.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        if !value.is_object() {
            return Err(ApiError::InvalidBody(
                "request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

/// Path parameter extractor with [`ApiError`] rejections.
///
/// Deserializes the captured segments into `T`, so typed parsing happens at
/// the routing boundary.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
