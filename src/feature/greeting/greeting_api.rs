//! Implementation of the greeting API. An API that returns a greeting
//! based on a path parameter, or a default when none is given.

use crate::feature::greeting::greeting_service;
use crate::infra::error::ErrorBody;
use crate::infra::extract::{Json, Path};
use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// Who to greet when the path does not name anyone.
const DEFAULT_NAME: &str = "Shadowman";

/// The greeting API endpoints.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/:name", get(hello))
}

/// This is a response to the greeting endpoints.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// A personal greeting.
    msg: String,
}

impl Greeting {
    /// Constructs a new greeting.
    pub fn new(msg: String) -> Self {
        Self { msg }
    }

    /// Returns the greeting message.
    pub fn msg(&self) -> &str {
        self.msg.as_ref()
    }
}

/// A handler for requests to the named greeting endpoint.
///
/// The name is echoed into the greeting verbatim, after URL decoding.
#[utoipa::path(
    get,
    path = "/{name}",
    params(
        ("name" = String, Path, description = "Who to greet")
    ),
    responses(
        (status = 200, description = "Success", body = Greeting),
        (status = 400, description = "Undecodable name", body = ErrorBody),
    )
)]
#[instrument]
pub async fn hello(Path(name): Path<String>) -> Json<Greeting> {
    Json(Greeting {
        msg: greeting_service::greet(&name),
    })
}

/// A handler for requests to the root endpoint.
/// Delegates to [`hello`] with the default name.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Success", body = Greeting),
    )
)]
#[instrument]
pub async fn root() -> Json<Greeting> {
    hello(Path(DEFAULT_NAME.to_string())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hello_greets_the_named_person() {
        let response = hello(Path("NotWorld".to_string())).await;

        assert_eq!(
            Greeting {
                msg: "Hello, NotWorld!".to_string(),
            },
            response.0
        );
    }

    #[tokio::test]
    async fn root_greets_the_default_name() {
        let response = root().await;

        assert_eq!(
            Greeting {
                msg: "Hello, Shadowman!".to_string(),
            },
            response.0
        );
    }
}
