//! Common error handling utilities for the key-pruner workspace
//!
//! This module provides the error type, error codes, and error context shared
//! by every crate in the workspace. Errors never carry the payload being
//! pruned, only the location inside it, so reporting an error can't leak the
//! data the caller was trying to sanitize.
//!
//! # Error Categories
//!
//! - **DepthExceeded**: a value nests deeper than the configured depth budget
//! - **Serialization**: a value could not be converted to or from JSON
//! - **Config**: pruner configuration failed to load or validate
//! - **Other**: wrapped errors from collaborating code
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, PathSegment, PruneError, ValuePath};
//!
//! let path = ValuePath::root()
//!     .child(PathSegment::key("users"))
//!     .child(PathSegment::index(3));
//! let err = PruneError::depth_exceeded(8, path);
//!
//! assert_eq!(err.code(), codes::pruning::DEPTH_EXCEEDED);
//! assert_eq!(err.to_string(), "Depth limit of 8 exceeded at /users/3");
//! ```

pub mod types;
pub mod context;
pub mod codes;

pub use types::*;
pub use context::*;
