//! Discovery: link aggregation and the `.well-known/core` endpoint
//!
//! This module implements RFC 6690 resource discovery over the registry:
//! the collector aggregates every registered handler's advertised links,
//! and the endpoint serves them as an `application/link-format` body.

pub mod collector;
pub mod endpoint;

pub use collector::{LinkCollection, LinkCollector};
pub use endpoint::{
    DiscoveryEndpoint, InboundEvent, Method, Request, Response, APPLICATION_LINK_FORMAT,
};
