pub use crate::docs::{
    OperationKey, OperationMarkers, RouteGroup, Verb, VisibilityRegistry, hide_operations,
    should_include,
};
pub use salute_domain::config::ApiConfig;
pub use salute_domain::marker::HideInProduction;
pub use salute_domain::profiles::ActiveProfiles;
