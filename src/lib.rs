//! # CoAP Discovery
//!
//! The resource-discovery registry of a CoAP server: handlers register the
//! URI patterns they serve, inbound requests are routed to the owning
//! handler with path-variable bindings, and the `/.well-known/core`
//! discovery request (RFC 6690) is answered by aggregating every
//! registered handler's advertised links into a link-format document.
//!
//! ## Features
//!
//! - **Ordered registration**: first-match routing priority follows
//!   registration order
//! - **Pattern matching**: literal and variable segments with binding
//!   capture, exact-length semantics
//! - **Link aggregation**: concrete patterns listed as-is, templated
//!   patterns expanded by their owning handler under a bounded timeout
//! - **Partial-failure isolation**: one misbehaving handler never blocks
//!   the discovery listing
//! - **Pluggable encoding**: bring your own RFC 6690 encoder, or use the
//!   built-in minimal one
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coap_discovery::prelude::*;
//!
//! let registry = SharedRegistry::new();
//! registry
//!     .register(sensor_handler, vec![Pattern::parse("sensors/{id}")])
//!     .await;
//!
//! // Routing an inbound request:
//! let matched = registry.route(&split_path("sensors/7")).await.unwrap();
//! assert_eq!(matched.bindings["id"], "7");
//!
//! // Serving discovery:
//! let endpoint = DiscoveryEndpoint::new(registry, &DiscoveryConfig::default());
//! let response = endpoint
//!     .handle(&Request {
//!         method: Method::Get,
//!         path: split_path(".well-known/core"),
//!     })
//!     .await;
//! ```
//!
//! The CoAP wire protocol, retransmission, blockwise transfer, and observe
//! semantics are out of scope; this crate assumes a transport layer that
//! frames requests and a dispatcher that forwards them.

pub mod config;
pub mod core;
pub mod discovery;
pub mod link_format;
pub mod registry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::ExpandError,
        handler::{HandlerId, ResourceHandler},
        pattern::{split_path, Bindings, Pattern, PatternSegment},
    };

    // === Registry ===
    pub use crate::registry::{Entry, Registry, RouteMatch, SharedRegistry};

    // === Discovery ===
    pub use crate::discovery::{
        DiscoveryEndpoint, InboundEvent, LinkCollection, LinkCollector, Method, Request, Response,
        APPLICATION_LINK_FORMAT,
    };

    // === Link format ===
    pub use crate::link_format::{CoreLinkEncoder, LinkFormatEncoder};

    // === Config ===
    pub use crate::config::DiscoveryConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
