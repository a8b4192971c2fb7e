/// Profile name that switches documentation into production mode.
pub const PROD_PROFILE: &str = "prod";

/// `OpenAPI` tag shared by the greeting endpoints.
pub const GREETING_TAG: &str = "Greeting";
pub const GREETING_TAG_DESCRIPTION: &str = "Greeting API with various salutation endpoints";

/// Prefix for environment overrides (`SALUTE__SERVER__PORT`, ...).
pub const ENV_PREFIX: &str = "SALUTE";
