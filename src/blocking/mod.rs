//! Blocking variant of the engine.
//!
//! Same resolution, dispatch, locking and rewrite semantics as the crate
//! root, with a synchronous [`Executor`] built on `reqwest::blocking`. No
//! internal concurrency: a call chain occupies the calling thread until the
//! transport call returns.

mod client;
mod executor;
mod path;

pub use client::{Client, ClientBuilder};
pub use executor::{Executor, HttpExecutor, JsonExecutor};
pub use path::{handler, Handler, PathNode};
