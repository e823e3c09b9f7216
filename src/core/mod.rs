//! Core module containing fundamental types and traits for the registry

pub mod error;
pub mod handler;
pub mod pattern;

pub use error::ExpandError;
pub use handler::{HandlerId, ResourceHandler};
pub use pattern::{split_path, Bindings, Pattern, PatternSegment};
