use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Marks a handler, or the group declaring it, as hidden from the generated
/// API document while the production profile is active.
///
/// Live routing is never affected; only the documentation step reads it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideInProduction {
    reason: Option<Cow<'static, str>>,
}

impl HideInProduction {
    /// A marker without a stated reason.
    #[must_use]
    pub const fn new() -> Self {
        Self { reason: None }
    }

    /// A marker carrying a human-readable reason.
    #[must_use]
    pub fn because(reason: impl Into<Cow<'static, str>>) -> Self {
        Self { reason: Some(reason.into()) }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
