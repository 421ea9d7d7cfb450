//! OpenAPI configuration.

use crate::feature::{greeting::greeting_api, info::info_api};
use utoipa::OpenApi;

/// OpenApi configuration.
#[derive(OpenApi)]
#[openapi(
    paths(
        greeting_api::hello,
        greeting_api::root,
        info_api::info,
    ),
    components(
        schemas(
            greeting_api::Greeting,
            info_api::AppInfo,
            crate::infra::error::ErrorBody
        )
    )
)]
#[derive(Clone, Copy, Debug)]
pub struct ApiDoc;
