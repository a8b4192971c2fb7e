use axum::routing::get;
use axum::{Json, Router};
use salute_kernel::docs::{base_document, hide_operations};
use salute_kernel::domain::config::ApiConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

/// Assembles the live routes and, when enabled, the filtered documentation routes.
pub(crate) fn init(cfg: &ApiConfig) -> Router {
    // Separate the live routes from the generated document
    let (routes, mut api_doc) = OpenApiRouter::<()>::with_openapi(base_document(&cfg.docs.info))
        .merge(salute_greetings::router())
        .split_for_parts();

    let visibility = salute_greetings::visibility();
    let hidden = hide_operations(&mut api_doc, &cfg.profiles, &visibility);

    info!(
        profiles = ?cfg.profiles.iter().collect::<Vec<_>>(),
        documented = api_doc.paths.paths.len(),
        hidden = hidden.len(),
        "API documentation generated"
    );

    let app = if cfg.docs.enabled {
        let api_doc = Arc::new(api_doc);
        let scalar_routes = Scalar::with_url(cfg.docs.ui_path.clone(), (*api_doc).clone());
        let openapi_json = Router::new().route(
            &cfg.docs.openapi_path,
            get(move || {
                let doc = Arc::clone(&api_doc);
                async move { Json(doc) }
            }),
        );

        routes.merge(openapi_json).merge(scalar_routes)
    } else {
        routes
    };

    app.layer(TraceLayer::new_for_http())
}
