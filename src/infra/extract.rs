//! Custom axum extractors.
//!
//! Wrappers around the axum versions that reply with an [`ErrorBody`]
//! instead of a plain text message when extraction fails.
//!
//! [`ErrorBody`]: super::error::ErrorBody

use super::error::ClientError;
use axum::{async_trait, extract::FromRequestParts, response::IntoResponse};
use http::request::Parts;
use serde::{de::DeserializeOwned, Serialize};

/// A custom JSON response since axum's does not let us customize the rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::extract::Json(self.0).into_response()
    }
}

/// A custom Path extractor since axum's does not let us customize the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<T> AsRef<T> for Path<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ClientError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let res = axum::extract::Path::from_request_parts(parts, state)
            .await
            .map_err(ClientError::from)?;
        Ok(Path(res.0))
    }
}
