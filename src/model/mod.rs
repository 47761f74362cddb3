//! # Data Model
//!
//! Plain DTOs shared by the search and normalization engines.
//!
//! Design rule: this module is pure data. No I/O, no state.

pub mod kind;
pub mod path;
pub mod value;

pub use kind::{StructuralKind, ValueType};
pub use path::Path;
pub use value::Value;
