//! Natural ordering of scalar values.

use std::cmp::Ordering;

use crate::model::Value;
use crate::{Error, Result};

/// Natural comparison of two scalars. Returns `None` when the pair has no
/// natural order.
///
/// - `Int` and `Float` compare numerically, also against each other
/// - `String` and `Bytes` compare lexicographically
/// - `Bool`: `false < true`
/// - `Date` and `DateTime` compare chronologically within their own type
///
/// Everything else is unordered: `Null` (even against `Null`), `NaN`,
/// composites, and any cross-type pairing not listed above.
pub fn natural_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        (Value::Int(a), Value::Float(b)) => int_float_cmp(*a, *b),
        (Value::Float(a), Value::Int(b)) => int_float_cmp(*b, *a).map(Ordering::reverse),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`. `None` only for `NaN`.
pub(crate) fn int_float_cmp(int: i64, float: f64) -> Option<Ordering> {
    // 2^63: every i64 lies in [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= BOUND {
        return Some(Ordering::Less);
    }
    if float < -BOUND {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

/// Type detail for comparability errors. `NaN` is named as such.
fn describe(value: &Value) -> String {
    match value {
        Value::Float(f) if f.is_nan() => "NaN".to_string(),
        other => other.type_name().to_string(),
    }
}

/// Sort scalars ascending by natural order (stable).
///
/// Fails with [`Error::Comparability`] if any two elements are not mutually
/// orderable. Fewer than two elements never compare and always succeed.
pub fn sort_scalars(mut scalars: Vec<Value>) -> Result<Vec<Value>> {
    if scalars.len() < 2 {
        return Ok(scalars);
    }

    // Orderability is "same ordering class, not NaN, not Null". Checking every
    // element against the first one (itself included) covers all pairs.
    let first = &scalars[0];
    for item in &scalars {
        if natural_cmp(first, item).is_none() {
            return Err(Error::Comparability {
                left: describe(first),
                right: describe(item),
            });
        }
    }

    scalars.sort_by(|a, b| natural_cmp(a, b).unwrap_or(Ordering::Equal));
    Ok(scalars)
}
