//! # algokit: Small Algorithms Toolkit
//!
//! Two independent engines plus a couple of thin utilities around them.
//!
//! ## Design Principles
//!
//! 1. **Implicit graphs**: search never materializes a graph, it asks a
//!    `NeighborFunction` for the neighbors of one node at a time
//! 2. **One value type**: `Value` is the tagged union every normalization
//!    step consumes and produces
//! 3. **Total dispatch**: structural kinds come from an exhaustive match, not
//!    runtime probing
//! 4. **Bounded recursion**: normalization refuses inputs nested deeper than
//!    the configured limit
//!
//! ## Quick Start
//!
//! ```rust
//! use algokit::{normalize, search, Value};
//! use algokit::search::grid::four_neighbors;
//!
//! let outcome = search((0, 0), (2, 2), four_neighbors);
//! let path = outcome.into_path().expect("grid is connected");
//! assert_eq!(path.nodes(), &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
//!
//! let v = Value::map([(Value::from("c"), Value::tuple([2, 1, 3])), (Value::Int(10), Value::list(["d", "a"]))]);
//! assert_eq!(normalize(&v)?.to_string(), "{'10': ['a', 'd'], 'c': (1, 2, 3)}");
//! # Ok::<(), algokit::Error>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `search` | Breadth-first shortest path with path reconstruction |
//! | `sort` | Deep canonical sort of nested values |
//! | `render` | Canonical text output of normalized values |
//! | `invoke` | Exact-type validated function invocation |
//! | `config` | Search and normalization limits |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod search;
pub mod sort;
pub mod render;
pub mod invoke;
pub mod config;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Path, StructuralKind, Value, ValueType};

// ============================================================================
// Re-exports: Engines
// ============================================================================

pub use search::{search, search_bounded, NeighborFunction, SearchOutcome};
pub use sort::{canonical_key_text, natural_cmp, normalize, normalize_with};
pub use render::{render, render_stdout, to_canonical_string};
pub use invoke::{safe_call, Callable, FnCallable, Kwargs, Signature};
pub use config::{Config, NormalizeConfig, SearchConfig};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Comparability error: cannot order {left} against {right}")]
    Comparability { left: String, right: String },

    #[error("Type mismatch for argument '{param}': expected {expected}, got {got}")]
    TypeMismatch { param: String, expected: String, got: String },

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
