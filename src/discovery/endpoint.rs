//! The `.well-known/core` discovery endpoint
//!
//! Answers read requests on the well-known path with the aggregated,
//! link-format-encoded resource listing. Any other method on that path is a
//! method-not-allowed outcome; requests for other paths are not this
//! component's business and are reported as unhandled so the surrounding
//! dispatcher can resolve them through the registry instead.

use crate::config::DiscoveryConfig;
use crate::discovery::collector::{LinkCollection, LinkCollector};
use crate::link_format::{CoreLinkEncoder, LinkFormatEncoder};
use crate::registry::SharedRegistry;
use std::sync::Arc;
use tracing::warn;

/// CoAP content-format identifier for `application/link-format`
pub const APPLICATION_LINK_FORMAT: u16 = 40;

/// Request method, as seen by this component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An inbound request event, already framed by the transport layer
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: Vec<String>,
}

/// Outcome of handling a request at the discovery endpoint
#[derive(Debug)]
pub enum Response {
    /// Success: the encoded listing, tagged with its content format
    Content { content_format: u16, payload: String },

    /// A non-read method was used on the discovery path
    MethodNotAllowed,

    /// The request's path is not the discovery path; resolution is the
    /// dispatcher's job, via the registry
    NotHandled,
}

/// Events the server runtime may deliver to this component
///
/// Only requests are meaningful here; anything else is logged and ignored
/// so the registry stays available when fed unexpected signals.
#[derive(Debug)]
pub enum InboundEvent {
    Request(Request),

    /// A control message foreign to this component's API
    Control(String),
}

/// Handles discovery requests against a shared registry
pub struct DiscoveryEndpoint {
    collector: LinkCollector,
    encoder: Arc<dyn LinkFormatEncoder>,
}

impl DiscoveryEndpoint {
    /// Create an endpoint with the default link-format encoder
    pub fn new(registry: SharedRegistry, config: &DiscoveryConfig) -> Self {
        Self::with_encoder(registry, config, Arc::new(CoreLinkEncoder))
    }

    /// Create an endpoint with a custom link-format encoder
    pub fn with_encoder(
        registry: SharedRegistry,
        config: &DiscoveryConfig,
        encoder: Arc<dyn LinkFormatEncoder>,
    ) -> Self {
        Self {
            collector: LinkCollector::new(registry, config),
            encoder,
        }
    }

    /// Handle one inbound request
    pub async fn handle(&self, request: &Request) -> Response {
        if !is_well_known_core_path(&request.path) {
            return Response::NotHandled;
        }

        if request.method != Method::Get {
            return Response::MethodNotAllowed;
        }

        let LinkCollection { links, failures } = self.collector.collect().await;
        for failure in &failures {
            warn!(%failure, "discovery listing is missing a contribution");
        }

        Response::Content {
            content_format: APPLICATION_LINK_FORMAT,
            payload: self.encoder.encode(&links),
        }
    }

    /// Handle one inbound event, ignoring those foreign to this component
    pub async fn handle_event(&self, event: InboundEvent) -> Option<Response> {
        match event {
            InboundEvent::Request(request) => Some(self.handle(&request).await),
            InboundEvent::Control(tag) => {
                warn!(control = %tag, "ignoring unrecognized control message");
                None
            }
        }
    }
}

fn is_well_known_core_path(path: &[String]) -> bool {
    matches!(path, [first, second] if first == ".well-known" && second == "core")
}
