//! Structural and exact-type classification of values.

use serde::{Deserialize, Serialize};

use super::Value;

/// The structural kind that decides how a value is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralKind {
    Mapping,
    Sequence,
    Set,
    Tuple,
    Scalar,
}

impl StructuralKind {
    pub fn is_composite(self) -> bool {
        !matches!(self, StructuralKind::Scalar)
    }

    pub fn name(self) -> &'static str {
        match self {
            StructuralKind::Mapping => "mapping",
            StructuralKind::Sequence => "sequence",
            StructuralKind::Set => "set",
            StructuralKind::Tuple => "tuple",
            StructuralKind::Scalar => "scalar",
        }
    }
}

/// Exact runtime type of a value. No subtyping: `Bool` is not an `Int`
/// and `Int` is not a `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Bytes,
    Date,
    DateTime,
    Map,
    List,
    Set,
    Tuple,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "NULL",
            ValueType::Bool => "BOOLEAN",
            ValueType::Int => "INTEGER",
            ValueType::Float => "FLOAT",
            ValueType::String => "STRING",
            ValueType::Bytes => "BYTES",
            ValueType::Date => "DATE",
            ValueType::DateTime => "DATETIME",
            ValueType::Map => "MAP",
            ValueType::List => "LIST",
            ValueType::Set => "SET",
            ValueType::Tuple => "TUPLE",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Classify into exactly one structural kind.
    ///
    /// Scalars are listed variant by variant so a new `Value` variant has
    /// to be classified here explicitly.
    pub fn kind(&self) -> StructuralKind {
        match self {
            Value::Map(_) => StructuralKind::Mapping,
            Value::List(_) => StructuralKind::Sequence,
            Value::Set(_) => StructuralKind::Set,
            Value::Tuple(_) => StructuralKind::Tuple,
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Bytes(_)
            | Value::Date(_)
            | Value::DateTime(_) => StructuralKind::Scalar,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Bytes(_) => ValueType::Bytes,
            Value::Date(_) => ValueType::Date,
            Value::DateTime(_) => ValueType::DateTime,
            Value::Map(_) => ValueType::Map,
            Value::List(_) => ValueType::List,
            Value::Set(_) => ValueType::Set,
            Value::Tuple(_) => ValueType::Tuple,
        }
    }
}
