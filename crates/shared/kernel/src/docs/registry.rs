//! Explicit per-operation documentation metadata.
//!
//! Feature crates declare their markers once at startup; the filter looks them
//! up by HTTP verb and `OpenAPI` path instead of inspecting handlers.

use fxhash::FxHashMap;
use salute_domain::marker::HideInProduction;
use std::borrow::Cow;
use std::fmt;

/// HTTP verbs that can carry an `OpenAPI` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Verb {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one documented operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationKey {
    pub verb: Verb,
    pub path: Cow<'static, str>,
}

impl OperationKey {
    pub fn new(verb: Verb, path: impl Into<Cow<'static, str>>) -> Self {
        Self { verb, path: path.into() }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

/// Markers attached to one operation: on the handler itself and on its group.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct OperationMarkers {
    pub handler: Option<HideInProduction>,
    pub group: Option<HideInProduction>,
}

impl OperationMarkers {
    #[must_use]
    pub const fn has_handler_marker(&self) -> bool {
        self.handler.is_some()
    }

    #[must_use]
    pub const fn has_group_marker(&self) -> bool {
        self.group.is_some()
    }

    /// Reason of the handler marker, falling back to the group marker.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.handler
            .as_ref()
            .and_then(HideInProduction::reason)
            .or_else(|| self.group.as_ref().and_then(HideInProduction::reason))
    }
}

/// A named set of routes (usually one `OpenAPI` tag) that may be marked as a whole.
#[derive(Debug, Clone)]
pub struct RouteGroup {
    name: Cow<'static, str>,
    marker: Option<HideInProduction>,
}

impl RouteGroup {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), marker: None }
    }

    /// Hides every operation of this group in production.
    #[must_use]
    pub fn hide_in_production(mut self, marker: HideInProduction) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn marker(&self) -> Option<&HideInProduction> {
        self.marker.as_ref()
    }

    /// Markers for an operation declared by this group.
    #[must_use]
    pub fn markers(&self, handler: Option<HideInProduction>) -> OperationMarkers {
        OperationMarkers { handler, group: self.marker.clone() }
    }
}

/// Table from operation to its markers, built once at startup.
///
/// Keyed by path first so lookups borrow the path from the document.
#[derive(Default, Debug, Clone)]
pub struct VisibilityRegistry {
    entries: FxHashMap<Cow<'static, str>, FxHashMap<Verb, OperationMarkers>>,
}

impl VisibilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operation declared by `group`.
    #[must_use]
    pub fn operation(
        mut self,
        group: &RouteGroup,
        verb: Verb,
        path: impl Into<Cow<'static, str>>,
        handler: Option<HideInProduction>,
    ) -> Self {
        self.insert(OperationKey::new(verb, path), group.markers(handler));
        self
    }

    /// Inserts or replaces the markers of one operation.
    pub fn insert(&mut self, key: OperationKey, markers: OperationMarkers) {
        self.entries.entry(key.path).or_default().insert(key.verb, markers);
    }

    /// Folds another registry into this one; later entries win.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (path, verbs) in other.entries {
            self.entries.entry(path).or_default().extend(verbs);
        }
        self
    }

    #[must_use]
    pub fn get(&self, verb: Verb, path: &str) -> Option<&OperationMarkers> {
        self.entries.get(path)?.get(&verb)
    }

    /// Whether any operation is registered under `path`.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OperationKey, &OperationMarkers)> {
        self.entries.iter().flat_map(|(path, verbs)| {
            verbs.iter().map(move |(verb, markers)| (OperationKey::new(*verb, path.clone()), markers))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(FxHashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_marker_reaches_every_operation() {
        let group = RouteGroup::new("internal").hide_in_production(HideInProduction::new());
        let registry = VisibilityRegistry::new()
            .operation(&group, Verb::Get, "/a", None)
            .operation(&group, Verb::Post, "/b", None);

        assert_eq!(registry.len(), 2);
        assert!(registry.iter().all(|(_, m)| m.has_group_marker() && !m.has_handler_marker()));
    }

    #[test]
    fn lookup_is_by_verb_and_path() {
        let group = RouteGroup::new("greeting");
        let registry = VisibilityRegistry::new().operation(
            &group,
            Verb::Get,
            "/x",
            Some(HideInProduction::because("secret")),
        );

        assert_eq!(registry.get(Verb::Get, "/x").and_then(OperationMarkers::reason), Some("secret"));
        assert!(registry.get(Verb::Post, "/x").is_none());
        assert!(registry.get(Verb::Get, "/y").is_none());
    }

    #[test]
    fn verbs_share_a_path() {
        let group = RouteGroup::new("items");
        let registry = VisibilityRegistry::new()
            .operation(&group, Verb::Get, "/item", None)
            .operation(&group, Verb::Post, "/item", Some(HideInProduction::new()));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains_path("/item"));
        assert!(!registry.contains_path("/other"));
        assert!(registry.get(Verb::Get, "/item").is_some_and(|m| !m.has_handler_marker()));
        assert!(registry.get(Verb::Post, "/item").is_some_and(OperationMarkers::has_handler_marker));

        let mut keys: Vec<_> = registry.iter().map(|(key, _)| key).collect();
        keys.sort();
        assert_eq!(keys, vec![OperationKey::new(Verb::Get, "/item"), OperationKey::new(Verb::Post, "/item")]);
    }

    #[test]
    fn merge_keeps_later_entries() {
        let group = RouteGroup::new("g");
        let first = VisibilityRegistry::new().operation(&group, Verb::Get, "/x", None);
        let second = VisibilityRegistry::new().operation(
            &group,
            Verb::Get,
            "/x",
            Some(HideInProduction::new()),
        );

        let merged = first.merge(second);
        assert_eq!(merged.len(), 1);
        assert!(merged.get(Verb::Get, "/x").is_some_and(OperationMarkers::has_handler_marker));
    }

    #[test]
    fn handler_reason_takes_precedence() {
        let markers = OperationMarkers {
            handler: Some(HideInProduction::because("handler")),
            group: Some(HideInProduction::because("group")),
        };
        assert_eq!(markers.reason(), Some("handler"));

        let markers = OperationMarkers { handler: None, group: Some(HideInProduction::because("group")) };
        assert_eq!(markers.reason(), Some("group"));
    }
}
