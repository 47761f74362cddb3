//! Validated invocation: check keyword arguments against declared exact
//! types, then call the function.
//!
//! The check is exact-type equality: an `Int` argument does not satisfy a
//! `Float` annotation and a `Bool` does not satisfy `Int`. Parameters with
//! no annotation and arguments with no matching parameter are not checked.

use serde::{Deserialize, Serialize};

use crate::model::{Value, ValueType};
use crate::{Error, Result};

// ============================================================================
// Signature
// ============================================================================

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// `None` accepts any argument type.
    pub annotation: Option<ValueType>,
}

/// Ordered parameter declarations of a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotated parameter.
    pub fn typed(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.params.push(Param { name: name.into(), annotation: Some(ty) });
        self
    }

    /// Add a parameter without annotation.
    pub fn untyped(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param { name: name.into(), annotation: None });
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Declared type of `name`, if the parameter exists and is annotated.
    pub fn annotation(&self, name: &str) -> Option<ValueType> {
        self.params.iter().find(|p| p.name == name).and_then(|p| p.annotation)
    }
}

// ============================================================================
// Keyword arguments
// ============================================================================

/// Named arguments in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    args: Vec<(String, Value)>,
}

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Kwargs::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an argument, replacing an earlier one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.args.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.args.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Like [`Kwargs::get`], failing with [`Error::MissingArgument`].
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| Error::MissingArgument(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.args.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

// ============================================================================
// Callable
// ============================================================================

/// A function that declares its parameters.
pub trait Callable {
    fn signature(&self) -> &Signature;
    fn call(&self, args: &Kwargs) -> Result<Value>;
}

/// Adapts a closure plus an explicit signature into a [`Callable`].
pub struct FnCallable<F> {
    signature: Signature,
    func: F,
}

impl<F> FnCallable<F>
where
    F: Fn(&Kwargs) -> Result<Value>,
{
    pub fn new(signature: Signature, func: F) -> Self {
        Self { signature, func }
    }
}

impl<F> Callable for FnCallable<F>
where
    F: Fn(&Kwargs) -> Result<Value>,
{
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: &Kwargs) -> Result<Value> {
        (self.func)(args)
    }
}

// ============================================================================
// Validation + invocation
// ============================================================================

/// Reject the first argument whose exact type differs from its annotation.
pub fn validate(signature: &Signature, kwargs: &Kwargs) -> Result<()> {
    for (name, value) in kwargs.iter() {
        let Some(expected) = signature.annotation(name) else {
            continue;
        };
        let got = value.value_type();
        if got != expected {
            return Err(Error::TypeMismatch {
                param: name.to_string(),
                expected: expected.name().to_string(),
                got: got.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Validate `kwargs` against `func`'s signature, then invoke `func`.
///
/// The function is not called at all when validation fails. Its result (or
/// error) is returned unchanged.
pub fn safe_call(func: &dyn Callable, kwargs: &Kwargs) -> Result<Value> {
    validate(func.signature(), kwargs)?;
    func.call(kwargs)
}
