//! Recursive key removal for structured data
//!
//! This crate strips named keys from every mapping of a nested value before the
//! value is logged, stored or sent elsewhere. It is meant for payloads whose
//! shape is not known ahead of time: request bodies, audit parameters, third
//! party responses.
//!
//! # Key Features
//!
//! - **Any Depth**: keys are removed from mappings nested inside mappings and
//!   sequences alike
//! - **Exact Matching**: key names compare by exact string equality, with no
//!   case folding or path syntax
//! - **Non-aliasing Output**: the borrowing API always builds fresh containers
//! - **Depth Budget**: `KeyPruner` refuses to descend past a configured nesting
//!   depth and reports where it stopped
//! - **Config Layering**: key lists and budgets load from files and
//!   `KEY_PRUNER_*` environment variables
//! - **Pruned Logging**: `pruned_info!` and friends never emit unpruned data
//!
//! # Example
//!
//! ```rust
//! use key_pruner::{prune, KeyPruner};
//! use serde_json::json;
//!
//! let request = json!({
//!     "user": "alice",
//!     "password": "hunter2",
//!     "sessions": [{"id": 1, "token": "abc"}]
//! });
//!
//! // One-off pruning
//! let clean = prune(&request, &["password", "token"]);
//! assert_eq!(clean, json!({"user": "alice", "sessions": [{"id": 1}]}));
//!
//! // Reusable pruner with a depth budget
//! let pruner = KeyPruner::for_keys(["password", "token"]).with_max_depth(16);
//! assert_eq!(pruner.prune(&request)?, clean);
//!
//! key_pruner::pruned_info!(&pruner, &request, "Handled login request");
//! # Ok::<(), key_pruner::PruneError>(())
//! ```
//!
//! # Configuration
//!
//! ```toml
//! keys = ["password", "token", "api_key"]
//! max_depth = 64
//! ```

pub mod keys;
pub mod pruner;
pub mod config;
pub mod macros;

pub use keys::*;
pub use pruner::*;
pub use self::config::*;
pub use error_common::{PathSegment, PruneError, Result, ValuePath};

#[doc(hidden)]
pub use tracing as __tracing;
