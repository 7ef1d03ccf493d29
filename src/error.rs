//! Defines the error types used throughout the `routrie` crate.

use thiserror::Error;

/// The primary error type for `routrie` operations.
///
/// Lookups never produce an error; everything here is raised synchronously
/// by insertion or configuration, before the tree is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The route pattern is structurally invalid: empty or whitespace-only,
    /// missing the leading separator, carrying a trailing separator or empty
    /// segments, or using reserved characters in the wrong position.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path, as given by the caller.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// The variable or separator character is unusable, or the tree already
    /// contains routes and its configuration is frozen.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration change was rejected.
        reason: String,
    },

    /// A parameter or catch-all name clashes: either it repeats within the
    /// inserted path, or a differently-named dynamic child already occupies
    /// this position in the tree.
    #[error("conflicting parameter {name:?} in {path:?}: {reason}")]
    ConflictingParameter {
        /// The path whose insertion failed.
        path: String,
        /// The parameter or catch-all name in conflict.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// An endpoint is already bound at this route for one of the requested
    /// methods. Middleware insertion never raises this.
    #[error("endpoint already bound for method {method:?} at {path:?}")]
    EndpointConflict {
        /// The path whose insertion failed.
        path: String,
        /// The method that is already taken.
        method: String,
    },

    /// The insertion requested no methods at all, so there would be nothing
    /// to bind.
    #[error("no methods supplied for {path:?}")]
    NoMethods {
        /// The path whose insertion failed.
        path: String,
    },
}
