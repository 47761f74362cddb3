//! # Deep canonical sort
//!
//! `normalize` rebuilds a nested value so that every level has a
//! deterministic order:
//!
//! | Kind | Result |
//! |------|--------|
//! | Map | keys coerced to canonical text, entries ascending by that text |
//! | List | normalized composites (encounter order), then sorted scalars |
//! | Set | same grouping as List, duplicates dropped |
//! | Tuple | same grouping as List, same arity |
//! | Scalar | unchanged |
//!
//! Composites have no natural order against each other, so only the scalar
//! group of a collection is sorted. Composites keep their encounter order
//! and get their internal order from recursion.

pub mod key;
pub mod order;

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::NormalizeConfig;
use crate::model::Value;
use crate::{Error, Result};

pub use key::canonical_key_text;
pub use order::{natural_cmp, sort_scalars};

/// Normalize `value` with the default depth bound.
///
/// ```rust
/// use algokit::{normalize, Value};
///
/// let v = Value::list(["d", "c", "a"]);
/// assert_eq!(normalize(&v)?.to_string(), "['a', 'c', 'd']");
/// # Ok::<(), algokit::Error>(())
/// ```
pub fn normalize(value: &Value) -> Result<Value> {
    normalize_with(value, &NormalizeConfig::default())
}

/// Normalize `value`, failing with [`Error::DepthExceeded`] when composites
/// nest deeper than `config.max_depth`.
pub fn normalize_with(value: &Value, config: &NormalizeConfig) -> Result<Value> {
    debug!(kind = value.kind().name(), max_depth = config.max_depth, "normalizing value");
    Normalizer { max_depth: config.max_depth }.value(value, 0)
}

struct Normalizer {
    max_depth: usize,
}

impl Normalizer {
    /// `depth` counts the composites enclosing `value`.
    fn value(&self, value: &Value, depth: usize) -> Result<Value> {
        if !value.is_composite() {
            return Ok(value.clone());
        }
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::DepthExceeded { limit: self.max_depth });
        }

        match value {
            Value::Map(entries) => self.mapping(entries, depth),
            Value::List(items) => Ok(Value::List(self.grouped(items, depth)?)),
            Value::Tuple(items) => Ok(Value::Tuple(self.grouped(items, depth)?)),
            Value::Set(items) => self.set(items, depth),
            scalar => Ok(scalar.clone()),
        }
    }

    fn mapping(&self, entries: &[(Value, Value)], depth: usize) -> Result<Value> {
        // Later entries overwrite earlier ones that share the same key text.
        let mut by_text: BTreeMap<String, &Value> = BTreeMap::new();
        for (key, value) in entries {
            self.check_key_depth(key, depth)?;
            let text = canonical_key_text(key);
            if by_text.insert(text.clone(), value).is_some() {
                warn!(key = %text, "mapping keys collide on canonical text; keeping the later entry");
            }
        }

        let mut normalized = Vec::with_capacity(by_text.len());
        for (text, value) in by_text {
            normalized.push((Value::String(text), self.value(value, depth)?));
        }
        Ok(Value::Map(normalized))
    }

    /// Keys are rendered as text rather than normalized, so their nesting is
    /// measured here with an explicit stack under the same bound.
    fn check_key_depth(&self, key: &Value, depth: usize) -> Result<()> {
        let mut pending = vec![(key, depth)];
        while let Some((value, depth)) = pending.pop() {
            if !value.is_composite() {
                continue;
            }
            let depth = depth + 1;
            if depth > self.max_depth {
                return Err(Error::DepthExceeded { limit: self.max_depth });
            }
            match value {
                Value::Map(entries) => {
                    for (k, v) in entries {
                        pending.push((k, depth));
                        pending.push((v, depth));
                    }
                }
                other => pending.extend(other.items().iter().map(|child| (child, depth))),
            }
        }
        Ok(())
    }

    /// Composites first in encounter order, then the sorted scalars.
    fn grouped(&self, items: &[Value], depth: usize) -> Result<Vec<Value>> {
        let mut composites = Vec::new();
        let mut scalars = Vec::new();
        for item in items {
            if item.is_composite() {
                composites.push(self.value(item, depth)?);
            } else {
                scalars.push(item.clone());
            }
        }
        composites.extend(sort_scalars(scalars)?);
        Ok(composites)
    }

    fn set(&self, items: &[Value], depth: usize) -> Result<Value> {
        // Distinct composites can become equal once normalized.
        let mut members: Vec<Value> = Vec::with_capacity(items.len());
        for item in self.grouped(items, depth)? {
            if !members.contains(&item) {
                members.push(item);
            }
        }
        Ok(Value::Set(members))
    }
}
