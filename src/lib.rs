//! # routrie
//!
//! routrie is a generic radix-tree router for Rust. It maps textual paths
//! (HTTP request paths, dotted event names, any hierarchical identifier) to
//! opaque *endpoint* and *middleware* values, keyed additionally by a
//! *method* label, and resolves concrete paths in time proportional to the
//! path length.
//!
//! ## Features
//!
//! - Literal, parameter (`/:id`), and catch-all (`/*rest`) matching with
//!   compact-trie edge splitting.
//! - Per-method endpoints: at most one endpoint per `(route, method)`.
//! - Per-method middleware chains, inherited top-down by every route below
//!   their registration point.
//! - A lookup result that distinguishes "no such route" from "route exists,
//!   method not allowed".
//! - Configurable variable and separator characters, so `.foo.$bar` routes
//!   work as well as `/foo/:bar`.
//! - Structured error handling with `thiserror`; efficient data structures
//!   (`AHashMap`, `IndexMap`).
//!
//! ## Example
//!
//! ```rust
//! use routrie::{RadixTree, RouteMatch};
//!
//! let mut tree = RadixTree::new();
//!
//! tree.insert("/users/:id", "user profile", &["GET"]).unwrap();
//! tree.insert("/static/*path", "assets", &["GET"]).unwrap();
//! tree.insert_middleware("/users", "auth", &["GET"]).unwrap();
//!
//! match tree.get("/users/42", "GET") {
//!     RouteMatch::Found { endpoint, middlewares, params } => {
//!         assert_eq!(*endpoint, "user profile");
//!         assert_eq!(middlewares, vec![&"auth"]);
//!         assert_eq!(params.get("id").map(String::as_str), Some("42"));
//!     }
//!     other => panic!("expected a match, got {other:?}"),
//! }
//!
//! // a matched route without an endpoint for the method is reported as
//! // method-not-allowed, distinguishable from a plain miss
//! assert!(tree.get("/users/42", "DELETE").is_method_not_allowed());
//! assert!(tree.get("/nowhere", "GET").is_not_found());
//!
//! assert!(tree.methods_for("/static/css/site.css").contains("GET"));
//! ```

pub mod error;
mod node;
mod operations;
mod segment;
pub mod tree;
pub mod types;

pub use error::TreeError;
pub use tree::{DEFAULT_SEPARATOR, DEFAULT_VARIABLE, RadixTree};
pub use types::{Params, RouteMatch, TreeConfig};
