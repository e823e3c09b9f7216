//! Ordered pattern registry: registration and first-match routing
//!
//! The registry holds an append-only, ordered list of (handler, pattern)
//! entries. Order is significant: it defines route-matching priority (the
//! first matching entry wins) and the pre-sort listing order of discovery
//! aggregation. The first entry is always the registry's own
//! `.well-known/core` resource, installed at construction and never removed.

use crate::core::handler::{HandlerId, ResourceHandler};
use crate::core::pattern::{Bindings, Pattern};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// One registered (handler, pattern) pair
///
/// Entries are never mutated in place; registration only appends.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Identity of the owning handler
    pub handler: HandlerId,

    /// The pattern that handler serves
    pub pattern: Pattern,
}

/// Result of routing an inbound path to its owning handler
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Identity of the handler whose pattern matched first
    pub handler: HandlerId,

    /// Variable bindings captured by the match
    pub bindings: Bindings,
}

/// A consistent view of the registry taken under the lock
///
/// Discovery aggregation works from a snapshot so that expansion calls into
/// handlers happen with no lock held.
pub struct RegistrySnapshot {
    pub entries: Vec<Entry>,
    pub handlers: HashMap<HandlerId, Arc<dyn ResourceHandler>>,
}

/// Ordered registry of resource patterns
pub struct Registry {
    entries: Vec<Entry>,
    handlers: HashMap<HandlerId, Arc<dyn ResourceHandler>>,
}

impl Registry {
    /// Create a registry containing only the `.well-known/core` self-entry
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                handler: HandlerId::well_known_core(),
                pattern: Pattern::well_known_core(),
            }],
            handlers: HashMap::new(),
        }
    }

    /// Append one entry per pattern, preserving the order of `patterns`
    ///
    /// Always succeeds. No validation of pattern well-formedness is
    /// performed; malformed patterns are a caller error. A handler may
    /// register multiple times; overlapping patterns are resolved by
    /// registration priority in [`Registry::route`].
    pub fn register(&mut self, handler: Arc<dyn ResourceHandler>, patterns: Vec<Pattern>) {
        let id = handler.id();
        for pattern in patterns {
            debug!(handler = %id, pattern = %pattern, "registering pattern");
            self.entries.push(Entry {
                handler: id.clone(),
                pattern,
            });
        }
        self.handlers.insert(id, handler);
    }

    /// Find the handler owning an inbound path
    ///
    /// Scans entries in registration order and returns the first whose
    /// pattern matches the path exactly, together with the variable
    /// bindings the match produced. `None` signals absence, not failure;
    /// callers translate it into a not-found response.
    pub fn route(&self, path: &[String]) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|bindings| RouteMatch {
                handler: entry.handler.clone(),
                bindings,
            })
        })
    }

    /// All entries, in registration order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up a registered handler by identity
    pub fn handler(&self, id: &HandlerId) -> Option<Arc<dyn ResourceHandler>> {
        self.handlers.get(id).cloned()
    }

    /// Clone the current entries and handler table
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            entries: self.entries.clone(),
            handlers: self.handlers.clone(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to the registry
///
/// All access goes through the inner lock so that registration and lookups
/// never interleave inconsistently: readers always see a fully-appended
/// entry list. Cloning the handle is cheap; all clones refer to the same
/// registry.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Create a shared registry containing only the self-entry
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Registry::new())),
        }
    }

    /// Register a handler's patterns (see [`Registry::register`])
    pub async fn register(&self, handler: Arc<dyn ResourceHandler>, patterns: Vec<Pattern>) {
        self.inner.write().await.register(handler, patterns);
    }

    /// Route an inbound path (see [`Registry::route`])
    pub async fn route(&self, path: &[String]) -> Option<RouteMatch> {
        self.inner.read().await.route(path)
    }

    /// Take a consistent snapshot of entries and handlers
    ///
    /// The lock is released as soon as the snapshot is cloned out, so
    /// callers can perform cross-component calls (pattern expansion) without
    /// holding the registry's serialization point. A handler whose expansion
    /// logic calls back into `register` or `route` therefore cannot
    /// deadlock.
    pub async fn snapshot(&self) -> RegistrySnapshot {
        self.inner.read().await.snapshot()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::split_path;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Minimal handler for registry tests; expansion is never exercised here
    struct MockHandler {
        id: HandlerId,
    }

    impl MockHandler {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                id: HandlerId::new(name),
            })
        }
    }

    #[async_trait]
    impl ResourceHandler for MockHandler {
        fn id(&self) -> HandlerId {
            self.id.clone()
        }

        async fn expand_pattern(&self, _pattern: &Pattern) -> Result<Vec<String>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_new_registry_holds_only_sentinel() {
        let registry = Registry::new();
        assert_eq!(registry.entries().len(), 1);
        assert!(registry.entries()[0].handler.is_well_known_core());
        assert_eq!(registry.entries()[0].pattern, Pattern::well_known_core());
    }

    #[test]
    fn test_register_appends_in_call_order() {
        let mut registry = Registry::new();
        registry.register(
            MockHandler::new("sensors"),
            vec![Pattern::parse("sensors/temp"), Pattern::parse("sensors/{id}")],
        );
        registry.register(MockHandler::new("actuators"), vec![Pattern::parse("leds")]);

        let patterns: Vec<String> = registry
            .entries()
            .iter()
            .map(|e| e.pattern.to_string())
            .collect();
        assert_eq!(
            patterns,
            vec![".well-known/core", "sensors/temp", "sensors/{id}", "leds"]
        );
    }

    #[test]
    fn test_route_sentinel_path() {
        let registry = Registry::new();
        let matched = registry.route(&split_path(".well-known/core")).unwrap();
        assert!(matched.handler.is_well_known_core());
        assert!(matched.bindings.is_empty());
    }

    #[test]
    fn test_route_returns_none_for_unknown_path() {
        let registry = Registry::new();
        assert!(registry.route(&split_path("nope")).is_none());
    }

    #[test]
    fn test_route_first_match_wins() {
        let mut registry = Registry::new();
        registry.register(
            MockHandler::new("first"),
            vec![Pattern::parse("sensors/{id}")],
        );
        registry.register(
            MockHandler::new("second"),
            vec![Pattern::parse("sensors/temp")],
        );

        // Both patterns match; the earlier registration takes priority.
        let matched = registry.route(&split_path("sensors/temp")).unwrap();
        assert_eq!(matched.handler, HandlerId::new("first"));
        assert_eq!(matched.bindings.get("id"), Some(&"temp".to_string()));
    }

    #[test]
    fn test_route_captures_bindings() {
        let mut registry = Registry::new();
        registry.register(
            MockHandler::new("sensors"),
            vec![Pattern::parse("sensors/{id}/value")],
        );

        let matched = registry.route(&split_path("sensors/7/value")).unwrap();
        assert_eq!(matched.handler, HandlerId::new("sensors"));
        assert_eq!(matched.bindings.get("id"), Some(&"7".to_string()));
    }

    #[test]
    fn test_handler_lookup_after_register() {
        let mut registry = Registry::new();
        registry.register(MockHandler::new("sensors"), vec![Pattern::parse("s")]);

        assert!(registry.handler(&HandlerId::new("sensors")).is_some());
        assert!(registry.handler(&HandlerId::new("unknown")).is_none());
    }

    #[tokio::test]
    async fn test_shared_registry_register_and_route() {
        let registry = SharedRegistry::new();
        registry
            .register(MockHandler::new("sensors"), vec![Pattern::parse("sensors/{id}")])
            .await;

        let matched = registry.route(&split_path("sensors/7")).await.unwrap();
        assert_eq!(matched.handler, HandlerId::new("sensors"));
        assert_eq!(matched.bindings.get("id"), Some(&"7".to_string()));
    }

    #[tokio::test]
    async fn test_snapshot_is_consistent_view() {
        let registry = SharedRegistry::new();
        registry
            .register(MockHandler::new("sensors"), vec![Pattern::parse("a"), Pattern::parse("b")])
            .await;

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.entries.len(), 3);
        assert!(snapshot.handlers.contains_key(&HandlerId::new("sensors")));
    }
}
