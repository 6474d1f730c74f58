//! # pathcall
//!
//! Engine for building typed, path-composable HTTP API clients: compose an
//! endpoint path by chaining segment accesses, then invoke the terminal
//! node to fire the request.
//!
//! ## Overview
//!
//! A [`Client`] owns a base path and a pluggable request executor. Each
//! [`seg`](Client::seg) access appends one path segment and yields a fresh
//! [`PathNode`]; invoking a node runs the dispatch invoker, which either
//! hands the call to a handler registered for the node's terminal segment
//! or falls through to the executor with the fully accumulated path.
//!
//! - **Typed paths**: `client.seg("quotes")?.seg("character")?` instead of
//!   string concatenation. Indexed-style access ([`Client::at`]) behaves
//!   identically.
//! - **Override registry**: per-type, immutable segment → handler tables
//!   built before the first node exists; see [`OverrideRegistry`].
//! - **Pluggable executors**: [`HttpExecutor`] hands back the raw response,
//!   [`JsonExecutor`] raises on non-2xx and parses JSON, and implementing
//!   [`Executor`] yourself is the primary customization seam.
//! - **Blocking variant**: the same engine on the caller's thread, under
//!   [`blocking`], the way reqwest splits its own surface.
//!
//! The engine validates nothing beyond segment names and recovers nothing:
//! no URL validation of composed paths, no caching, no retries. Transport
//! and status failures belong to the executor.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pathcall::{CallArgs, Client, JsonExecutor};
//!
//! #[tokio::main]
//! async fn main() -> pathcall::Result<()> {
//!     let client = Client::new("https://animechan.example/api/", JsonExecutor::new())?;
//!
//!     let quotes = client
//!         .seg("quotes")?
//!         .seg("character")?
//!         .call(CallArgs::get().query("name", "Kino"))
//!         .await?;
//!     println!("{quotes}");
//!     Ok(())
//! }
//! ```
//!
//! ## Handlers
//!
//! A handler intercepts calls on its segment before the executor sees
//! them. Once chosen, the handler owns the call — further dispatch happens
//! only if it asks for it, typically through [`PathNode::request`].
//!
//! ```rust,no_run
//! use futures::future::BoxFuture;
//! use pathcall::{handler, CallArgs, Client, JsonExecutor, OverrideRegistry, PathNode};
//!
//! #[tokio::main]
//! async fn main() -> pathcall::Result<()> {
//!     let quotes = OverrideRegistry::builder()
//!         .handler(
//!             "character",
//!             handler(
//!                 |node: &PathNode<JsonExecutor>,
//!                  args: CallArgs|
//!                  -> BoxFuture<'_, pathcall::Result<serde_json::Value>> {
//!                     Box::pin(async move {
//!                         // Required argument; absence names `character`,
//!                         // not this closure.
//!                         let name = args.require_query("name")?.to_owned();
//!                         node.request(CallArgs::get().query("name", name).query("page", "1"))
//!                             .await
//!                     })
//!                 },
//!             ),
//!         )
//!         .build();
//!     let registry = OverrideRegistry::builder().child("quotes", quotes).build();
//!
//!     let client = Client::builder("https://animechan.example/api/", JsonExecutor::new())
//!         .registry(registry)
//!         .build()?;
//!     let quote = client
//!         .seg("quotes")?
//!         .seg("character")?
//!         .call(CallArgs::get().query("name", "Kino"))
//!         .await?;
//!     println!("{quote}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Root client and builder |
//! | [`path`] | Path nodes and the dispatch invoker |
//! | [`registry`] | Segment → handler override registries |
//! | [`executor`] | Suspending request executors |
//! | [`blocking`] | Blocking variant of the whole engine |
//! | [`args`] | Per-invocation call arguments |
//! | [`builder`] | Client-less path composition |
//! | [`error`] | Error taxonomy |

pub mod args;
pub mod blocking;
pub mod builder;
pub mod client;
pub mod error;
pub mod executor;
pub mod path;
pub mod registry;

mod segment;

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

// Re-export main types for convenience
pub use args::CallArgs;
pub use builder::PathBuilder;
pub use client::{Client, ClientBuilder};
pub use error::{Error, ResolutionReason, TransportError};
pub use executor::{Executor, HttpExecutor, JsonExecutor};
pub use path::{handler, Handler, PathNode};
pub use registry::{OverrideRegistry, RegistryBuilder};
