//! Typed errors for discovery aggregation
//!
//! Expansion failures are deliberately non-fatal: one misbehaving handler
//! must never abort the whole discovery listing. The collector records each
//! failure and continues, so these errors surface as a partial-failure
//! report rather than as an early return.

use crate::core::handler::HandlerId;
use std::fmt;
use std::time::Duration;

/// A failed pattern-expansion call to one handler
#[derive(Debug)]
pub enum ExpandError {
    /// The handler did not answer within the configured bound
    TimedOut {
        handler: HandlerId,
        pattern: String,
        timeout: Duration,
    },

    /// The handler answered with an error
    Failed {
        handler: HandlerId,
        pattern: String,
        message: String,
    },

    /// A templated entry whose handler is unknown to the registry
    ///
    /// Cannot happen through the public registration API, which records the
    /// handler alongside its patterns; kept so a snapshot inconsistency is
    /// reported instead of panicking.
    UnknownHandler { handler: HandlerId, pattern: String },
}

impl ExpandError {
    /// The identity of the handler whose expansion failed
    pub fn handler(&self) -> &HandlerId {
        match self {
            ExpandError::TimedOut { handler, .. } => handler,
            ExpandError::Failed { handler, .. } => handler,
            ExpandError::UnknownHandler { handler, .. } => handler,
        }
    }

    /// The textual form of the pattern whose expansion failed
    pub fn pattern(&self) -> &str {
        match self {
            ExpandError::TimedOut { pattern, .. } => pattern,
            ExpandError::Failed { pattern, .. } => pattern,
            ExpandError::UnknownHandler { pattern, .. } => pattern,
        }
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::TimedOut {
                handler,
                pattern,
                timeout,
            } => {
                write!(
                    f,
                    "Expansion of '{}' by handler '{}' timed out after {:?}",
                    pattern, handler, timeout
                )
            }
            ExpandError::Failed {
                handler,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Expansion of '{}' by handler '{}' failed: {}",
                    pattern, handler, message
                )
            }
            ExpandError::UnknownHandler { handler, pattern } => {
                write!(
                    f,
                    "No handler '{}' recorded for templated pattern '{}'",
                    handler, pattern
                )
            }
        }
    }
}

impl std::error::Error for ExpandError {}
