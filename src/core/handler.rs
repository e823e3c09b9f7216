//! Handler identity and the resource handler contract
//!
//! Handlers are external components that own one or more resources. The
//! registry only knows them by an opaque value identity and by the
//! [`ResourceHandler`] trait it calls back into during discovery.

use crate::core::pattern::Pattern;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

/// Opaque identity of a registered handler, compared by value
///
/// The registry reserves one identity for itself: the sentinel under which
/// the `.well-known/core` resource is installed. The sentinel entry is
/// excluded from discovery listings (the discovery resource never lists
/// itself).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(String);

impl HandlerId {
    /// Create a handler identity from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The reserved sentinel identity of the discovery resource itself
    pub fn well_known_core() -> Self {
        Self(".well-known/core".to_string())
    }

    /// True iff this is the registry's own sentinel identity
    pub fn is_well_known_core(&self) -> bool {
        self.0 == ".well-known/core"
    }

    /// The identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HandlerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Contract implemented by resource handlers that join the registry
///
/// Handlers are trusted to honor this contract: the registry does not
/// validate the patterns they register or the URIs they expand to.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// The handler's unique identity
    fn id(&self) -> HandlerId;

    /// Expand a templated pattern into the concrete URIs it currently covers
    ///
    /// Called during discovery aggregation for every templated pattern this
    /// handler registered. Expansion policy (for example, listing the active
    /// sub-resources of a family) is entirely the handler's business; the
    /// aggregator only concatenates the results. Each URI is returned in its
    /// slash-separated textual form, without a leading slash
    /// (e.g. `"sensors/1"`).
    async fn expand_pattern(&self, pattern: &Pattern) -> Result<Vec<String>>;
}
