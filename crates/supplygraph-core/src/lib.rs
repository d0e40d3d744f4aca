//! # SupplyGraph Core
//!
//! Directed supply-chain graph engine.
//!
//! Maintains a graph of named entities (suppliers, manufacturers,
//! distributors) connected by directed flows, supporting incremental
//! mutation and shortest-path queries over the live graph.
//!
//! ## Features
//!
//! - **Incremental mutation**: add/remove entities and flows with typed,
//!   non-fatal error reporting
//! - **Deterministic listings**: insertion order preserved for entities and
//!   flows
//! - **Shortest paths**: breadth-first search over unweighted flows
//! - **Bounded reachability**: depth- and count-limited expansion
//!
//! ## Quick Start
//!
//! ```rust
//! use supplygraph_core::{shortest_path, FlowStore};
//!
//! fn main() -> supplygraph_core::Result<()> {
//!     let mut store = FlowStore::new();
//!     store.add_entity("supplier")?;
//!     store.add_entity("factory")?;
//!     store.add_entity("retailer")?;
//!     store.add_flow("supplier", "factory")?;
//!     store.add_flow("factory", "retailer")?;
//!
//!     let path = shortest_path(&store, "supplier", "retailer")?;
//!     assert_eq!(path, ["supplier", "factory", "retailer"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use config::{ConfigError, LoggingConfig, SupplyConfig, TraversalSettings};
pub use error::{Error, Result};
pub use graph::{
    reachable, shortest_path, FlowRecord, FlowStore, FlowTraversal, TraversalConfig, TraversalStep,
};
