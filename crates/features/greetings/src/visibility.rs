use salute_domain::constants::GREETING_TAG;
use salute_domain::marker::HideInProduction;
use salute_kernel::docs::{RouteGroup, Verb, VisibilityRegistry};

pub(crate) const HELLO_HIDDEN_REASON: &str = "Security sensitive endpoint hidden in production";

/// Documentation markers for every greeting operation.
///
/// Paths must match the `path` declared on each greeting handler.
#[must_use]
pub fn visibility() -> VisibilityRegistry {
    let group = RouteGroup::new(GREETING_TAG);

    VisibilityRegistry::new()
        .operation(&group, Verb::Get, "/hello", Some(HideInProduction::because(HELLO_HIDDEN_REASON)))
        .operation(&group, Verb::Get, "/hi", None)
        .operation(&group, Verb::Get, "/bye", None)
        .operation(&group, Verb::Get, "/goodbye", None)
}
