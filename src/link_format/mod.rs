//! RFC 6690 link-format encoding seam
//!
//! The discovery endpoint hands its aggregated URI list to an encoder
//! collaborator. Servers that already carry a full link-format
//! implementation plug it in behind [`LinkFormatEncoder`];
//! [`CoreLinkEncoder`] is the default, producing one bare link entry per
//! URI with no target attributes.

/// Encoder collaborator turning a URI list into link-format text
pub trait LinkFormatEncoder: Send + Sync {
    /// Encode the given concrete URIs as an `application/link-format` body
    fn encode(&self, links: &[String]) -> String;
}

/// Minimal link-format encoder
///
/// Produces `</uri1>,</uri2>,...` — one entry per link, comma separated,
/// each URI rooted with a leading slash.
#[derive(Debug, Default, Clone)]
pub struct CoreLinkEncoder;

impl LinkFormatEncoder for CoreLinkEncoder {
    fn encode(&self, links: &[String]) -> String {
        links
            .iter()
            .map(|link| format!("</{}>", link))
            .collect::<Vec<_>>()
            .join(",")
    }
}
