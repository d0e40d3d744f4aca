//! Error types for the supply-chain graph engine.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph operations.
///
/// Every variant is a recoverable outcome of normal use: the store is left
/// unchanged and the caller decides how to present the failure. None of these
/// conditions terminate the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Adding an entity whose id is already present.
    #[error("entity '{0}' already exists")]
    EntityExists(String),

    /// Removing an entity whose id is not present.
    #[error("entity '{0}' not found")]
    EntityNotFound(String),

    /// Adding a flow where one or both endpoints are missing.
    #[error("cannot add flow from '{from}' to '{to}': both entities must exist")]
    FlowEndpointsMissing {
        /// Requested source entity.
        from: String,
        /// Requested target entity.
        to: String,
    },

    /// Removing a flow whose source entity is missing.
    #[error("source entity '{0}' not found")]
    SourceNotFound(String),

    /// Removing a flow that has no occurrence in the source's neighbor
    /// sequence.
    #[error("no flow exists from '{from}' to '{to}'")]
    FlowNotFound {
        /// Requested source entity.
        from: String,
        /// Requested target entity.
        to: String,
    },

    /// Querying a path where one or both endpoints are missing.
    #[error("invalid path endpoints: '{start}' and '{end}' must both exist")]
    PathEndpointsMissing {
        /// Requested start entity.
        start: String,
        /// Requested end entity.
        end: String,
    },

    /// No path exists between two existing entities.
    #[error("no path found from '{start}' to '{end}'")]
    PathNotFound {
        /// Requested start entity.
        start: String,
        /// Requested end entity.
        end: String,
    },
}
