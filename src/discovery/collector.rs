//! Link aggregation for the discovery endpoint
//!
//! Walks the registry's entries in registration order, skipping the
//! `.well-known/core` self-entry. Concrete patterns contribute their single
//! URI as-is; templated patterns are expanded by a bounded call into the
//! owning handler. The concatenated result is deduplicated and sorted
//! before it is handed to the link-format encoder.

use crate::config::DiscoveryConfig;
use crate::core::error::ExpandError;
use crate::registry::SharedRegistry;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Result of one aggregation pass
///
/// `failures` is the partial-failure signal: a handler that errored or
/// timed out during expansion is listed here, and its contribution is
/// simply missing from `links`. The listing itself is never aborted by one
/// misbehaving handler.
#[derive(Debug, Default)]
pub struct LinkCollection {
    /// Deduplicated concrete URIs, sorted lexicographically over segments
    pub links: Vec<String>,

    /// Expansion calls that contributed nothing
    pub failures: Vec<ExpandError>,
}

/// Aggregates every registered handler's advertised links
pub struct LinkCollector {
    registry: SharedRegistry,
    expand_timeout: Duration,
}

impl LinkCollector {
    /// Create a collector over the given registry
    pub fn new(registry: SharedRegistry, config: &DiscoveryConfig) -> Self {
        Self {
            registry,
            expand_timeout: config.expand_timeout(),
        }
    }

    /// Collect the concrete URIs of every registered entry
    ///
    /// Works from a registry snapshot, so every expansion call happens with
    /// no registry lock held. Expansion calls run sequentially in
    /// registration order, each bounded by the configured timeout.
    pub async fn collect(&self) -> LinkCollection {
        let snapshot = self.registry.snapshot().await;

        let mut links = Vec::new();
        let mut failures = Vec::new();

        for entry in &snapshot.entries {
            // The discovery resource never lists itself.
            if entry.handler.is_well_known_core() {
                continue;
            }

            if let Some(uri) = entry.pattern.concrete_uri() {
                links.push(uri);
                continue;
            }

            let Some(handler) = snapshot.handlers.get(&entry.handler) else {
                failures.push(ExpandError::UnknownHandler {
                    handler: entry.handler.clone(),
                    pattern: entry.pattern.to_string(),
                });
                continue;
            };

            match timeout(self.expand_timeout, handler.expand_pattern(&entry.pattern)).await {
                Ok(Ok(expanded)) => links.extend(expanded),
                Ok(Err(err)) => {
                    let failure = ExpandError::Failed {
                        handler: entry.handler.clone(),
                        pattern: entry.pattern.to_string(),
                        message: err.to_string(),
                    };
                    warn!(%failure, "pattern expansion failed");
                    failures.push(failure);
                }
                Err(_) => {
                    let failure = ExpandError::TimedOut {
                        handler: entry.handler.clone(),
                        pattern: entry.pattern.to_string(),
                        timeout: self.expand_timeout,
                    };
                    warn!(%failure, "pattern expansion timed out");
                    failures.push(failure);
                }
            }
        }

        // Global dedup after full collection; sort compares split segments,
        // not the joined string.
        links.sort_by(|a, b| a.split('/').cmp(b.split('/')));
        links.dedup();

        LinkCollection { links, failures }
    }
}
