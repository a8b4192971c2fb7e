//! Documentation-time filtering of the generated `OpenAPI` document.
//!
//! Runs once while the router is assembled. Live request routing never
//! consults anything in this module.

mod filter;
mod info;
mod registry;

pub use filter::should_include;
pub use info::base_document;
pub use registry::{OperationKey, OperationMarkers, RouteGroup, Verb, VisibilityRegistry};

use salute_domain::profiles::ActiveProfiles;
use tracing::{debug, info};
use utoipa::openapi::OpenApi;
use utoipa::openapi::path::{Operation, PathItem};

/// Removes every operation the active profiles ask to hide.
///
/// Operations without a registry entry carry no markers and are kept. Path
/// items left without any operation are dropped. Returns the hidden operations
/// in sorted order; running it again on the result hides nothing further.
pub fn hide_operations(
    api: &mut OpenApi,
    profiles: &ActiveProfiles,
    registry: &VisibilityRegistry,
) -> Vec<OperationKey> {
    let is_prod_active = profiles.is_prod_active();
    let mut hidden = Vec::new();

    for (path, item) in &mut api.paths.paths {
        for (verb, slot) in operations_mut(item) {
            if slot.is_none() {
                continue;
            }

            let markers = registry.get(verb, path);
            let on_handler = markers.is_some_and(OperationMarkers::has_handler_marker);
            let on_group = markers.is_some_and(OperationMarkers::has_group_marker);

            if should_include(is_prod_active, on_handler, on_group) {
                continue;
            }

            *slot = None;
            let key = OperationKey::new(verb, path.clone());
            info!(
                operation = %key,
                reason = markers.and_then(OperationMarkers::reason).unwrap_or("unspecified"),
                "Hiding operation from API documentation"
            );
            hidden.push(key);
        }
    }

    api.paths.paths.retain(|_, item| has_operations(item));
    hidden.sort();

    debug!(
        prod = is_prod_active,
        hidden = hidden.len(),
        remaining = api.paths.paths.len(),
        "API documentation filtered"
    );

    hidden
}

fn operations_mut(item: &mut PathItem) -> [(Verb, &mut Option<Operation>); 8] {
    [
        (Verb::Get, &mut item.get),
        (Verb::Put, &mut item.put),
        (Verb::Post, &mut item.post),
        (Verb::Delete, &mut item.delete),
        (Verb::Options, &mut item.options),
        (Verb::Head, &mut item.head),
        (Verb::Patch, &mut item.patch),
        (Verb::Trace, &mut item.trace),
    ]
}

fn has_operations(item: &PathItem) -> bool {
    [
        &item.get,
        &item.put,
        &item.post,
        &item.delete,
        &item.options,
        &item.head,
        &item.patch,
        &item.trace,
    ]
    .iter()
    .any(|op| op.is_some())
}
