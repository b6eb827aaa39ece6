//! Placeholder values supplied at render time.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{error::Error, placeholder::Intermediate};

/// A value substituted for a placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// Placeholder name to value lookup used while rendering, ordered by name.
///
/// Later insertions under the same name replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<Intermediate, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values
            .insert(Intermediate::new(name.into()), value.into());
    }

    pub fn get(&self, intermediate: &Intermediate) -> Option<&Value> {
        self.values.get(intermediate)
    }

    /// Entries in placeholder name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Intermediate, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds a lookup from alternating name/value pairs.
    ///
    /// Every even position must hold a [`Value::Str`] naming the placeholder
    /// that the following value fills.
    pub fn from_alternating(args: &[Value]) -> Result<Self, Error> {
        if args.len() % 2 != 0 {
            return Err(Error::OddParameterCount(args.len()));
        }

        let mut params = Params::new();
        for (index, pair) in args.chunks_exact(2).enumerate() {
            let name = pair[0]
                .as_str()
                .ok_or(Error::NonStringParameterName(index * 2))?;
            params.insert(name, pair[1].clone());
        }
        Ok(params)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
