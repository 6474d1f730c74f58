//! Unified error type for the path-dispatch engine.
//!
//! The engine recovers nothing on its own: no retries, no fallbacks. Its
//! only local responsibilities are guaranteed lock release and the
//! argument-mismatch rewrite performed by the dispatch invoker. Everything
//! else surfaces directly to the caller.

use thiserror::Error;

/// Placeholder segment name used by [`Error::mismatch`] until the dispatch
/// invoker rewrites it to the segment the caller actually accessed.
pub(crate) const UNRESOLVED_SEGMENT: &str = "<call>";

/// Why a member name could not become a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolutionReason {
    /// Names with a leading underscore are reserved for internal state and
    /// never become endpoint segments.
    #[error("the name is reserved")]
    Reserved,

    #[error("the name is empty")]
    Empty,

    /// A segment carrying the path separator would silently contribute more
    /// than one path component.
    #[error("the name contains a path separator")]
    SeparatorInName,

    /// The node is mid-invocation; chaining off an in-flight call is not
    /// allowed.
    #[error("the node is locked by an in-flight invocation")]
    Locked,
}

/// Error type for the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A member name could not be resolved into a path segment. Raised at
    /// the point of access, never deferred to invocation time.
    #[error("cannot resolve segment `{segment}`: {reason}")]
    Resolution {
        segment: String,
        reason: ResolutionReason,
    },

    /// A handler or executor was invoked with arguments it cannot accept.
    /// The dispatch invoker rewrites `segment` so the report names the
    /// accessed path segment rather than an internal call site.
    #[error("`{segment}` called with incompatible arguments: {message}")]
    ArgumentMismatch { segment: String, message: String },

    /// Client construction failed (malformed base URL).
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Connection-level failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx response. Produced only by the JSON-reducing executors; the
    /// raw executors hand the response back untouched.
    #[error("HTTP {status} from {url}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// An argument-mismatch error whose segment is filled in later by the
    /// dispatch invoker. Handlers and executors use this when a required
    /// call argument is missing or ill-typed.
    pub fn mismatch(message: impl Into<String>) -> Self {
        Error::ArgumentMismatch {
            segment: UNRESOLVED_SEGMENT.to_string(),
            message: message.into(),
        }
    }

    /// Rewrite an argument-mismatch so it names the accessed segment.
    /// Every other variant passes through unchanged.
    pub(crate) fn named(self, segment: &str) -> Self {
        match self {
            Error::ArgumentMismatch { message, .. } => Error::ArgumentMismatch {
                segment: segment.to_string(),
                message,
            },
            other => other,
        }
    }
}

/// Low-level transport failures surfaced by the built-in executors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
