//! Greeting feature slice: four static-text endpoints plus the documentation
//! markers that decide which of them stay visible in production docs.
//!
//! ```rust,ignore
//! let (router, api) = salute_greetings::router::<()>().split_for_parts();
//! let registry = salute_greetings::visibility();
//! ```

mod handlers;
mod visibility;

pub use visibility::visibility;

use salute_domain::constants::{GREETING_TAG, GREETING_TAG_DESCRIPTION};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{OpenApi, OpenApiBuilder};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Document fragment describing the greeting tag.
#[must_use]
pub fn api_doc() -> OpenApi {
    let tag =
        TagBuilder::new().name(GREETING_TAG).description(Some(GREETING_TAG_DESCRIPTION)).build();
    OpenApiBuilder::new().tags(Some(vec![tag])).build()
}

/// Routes of the greeting slice, documented through `utoipa`.
pub fn router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    tracing::debug!("Registering greeting routes");

    OpenApiRouter::<S>::with_openapi(api_doc())
        .routes(routes!(handlers::say_hello))
        .routes(routes!(handlers::say_hi))
        .routes(routes!(handlers::say_bye))
        .routes(routes!(handlers::say_goodbye))
}
