//! Segment validation and path arithmetic shared by the async and blocking
//! node types.

use crate::error::{Error, ResolutionReason};
use crate::Result;

pub(crate) const SEPARATOR: char = '/';

/// Prefix marking a name as internal state rather than an endpoint segment.
pub(crate) const RESERVED_PREFIX: char = '_';

/// Check that `name` may become a path segment.
pub(crate) fn validate(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some(ResolutionReason::Empty)
    } else if name.starts_with(RESERVED_PREFIX) {
        Some(ResolutionReason::Reserved)
    } else if name.contains(SEPARATOR) {
        Some(ResolutionReason::SeparatorInName)
    } else {
        None
    };
    match reason {
        Some(reason) => Err(Error::Resolution {
            segment: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Append `name` to `path`, keeping the trailing-separator invariant.
pub(crate) fn join(path: &str, name: &str) -> String {
    let mut joined = String::with_capacity(path.len() + name.len() + 1);
    joined.push_str(path);
    joined.push_str(name);
    joined.push(SEPARATOR);
    joined
}

/// The last accumulated segment of `path`, or `None` when the path has not
/// grown past `base` (dispatch on a bare root goes straight to the
/// executor).
pub(crate) fn terminal<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if path.len() <= base.len() {
        return None;
    }
    let trimmed = path.strip_suffix(SEPARATOR).unwrap_or(path);
    trimmed.rsplit(SEPARATOR).next().filter(|s| !s.is_empty())
}

/// Normalize a base path so non-empty bases always end with the separator.
pub(crate) fn normalize_base(base: &str) -> String {
    if base.is_empty() || base.ends_with(SEPARATOR) {
        base.to_string()
    } else {
        let mut owned = String::with_capacity(base.len() + 1);
        owned.push_str(base);
        owned.push(SEPARATOR);
        owned
    }
}
