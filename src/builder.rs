//! Client-less path composition.
//!
//! [`PathBuilder`] accumulates endpoint paths with the same segment rules
//! as the client nodes, but without an executor attached — useful when all
//! you want is the string.
//!
//! ```
//! use pathcall::PathBuilder;
//!
//! # fn main() -> pathcall::Result<()> {
//! let path = PathBuilder::new("https://some.web.site/")
//!     .seg("api")?
//!     .seg("test")?
//!     .seg("endpoint")?;
//! assert_eq!(path.as_str(), "https://some.web.site/api/test/endpoint/");
//! # Ok(())
//! # }
//! ```

use crate::segment;
use crate::Result;

/// Pure accumulator of a URL path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuilder {
    path: String,
}

impl PathBuilder {
    /// Start from `base`, normalized to end with the separator.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            path: segment::normalize_base(&base.into()),
        }
    }

    /// Append one segment. Reserved, empty and separator-laden names fail
    /// without touching the path.
    pub fn seg(mut self, name: &str) -> Result<Self> {
        segment::validate(name)?;
        self.path = segment::join(&self.path, name);
        Ok(self)
    }

    /// Indexed-style append, identical to [`seg`](Self::seg).
    pub fn at(self, name: &str) -> Result<Self> {
        self.seg(name)
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_inner(self) -> String {
        self.path
    }
}

impl std::fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}
