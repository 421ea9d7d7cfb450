//! The features of the application.

use axum::Router;

pub mod greeting;
pub mod info;

/// Constructs the API routes that live under the `/api` prefix.
///
/// The greeting routes are not included here; they own the root
/// namespace and are merged directly by [`crate::app::app`].
pub fn api() -> Router {
    Router::new().merge(info::info_api::routes())
}
