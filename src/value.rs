//! Dynamic values
//!
//! A small self-describing value type for callers whose sequences are not
//! statically typed (decoded documents, heterogeneous lists). Records expose
//! named fields, so `DiffOptions::key_field("id")` works out of the box.
//!
//! Equality is structural: two records with the same fields in the same order
//! are equal.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::algo::{FieldAccess, Item};
use crate::sequence::Sequence;

/// Record fields in insertion order.
///
/// Most records are small, so the first few fields share one allocation.
pub type Fields = SmallVec<[(CompactString, Value); 4]>;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(CompactString),
    /// Ordered list of values
    List(Vec<Value>),
    /// Named fields
    Record(Box<Fields>),
}

impl Value {
    /// Build a record from `(name, value)` pairs.
    pub fn record<N, V>(fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<CompactString>,
        V: Into<Value>,
    {
        Self::Record(Box::new(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        ))
    }

    /// Build a list.
    pub fn list<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Get a field of a record by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(fields) => fields.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Set a field on a record (insert or update). No-op on non-records.
    pub fn set(&mut self, name: impl Into<CompactString>, value: impl Into<Value>) {
        if let Self::Record(fields) = self {
            let name = name.into();
            let value = value.into();
            if let Some(field) = fields.iter_mut().find(|(k, _)| *k == name) {
                field.1 = value;
            } else {
                fields.push((name, value));
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Item for Value {
    #[inline]
    fn is_composite(&self) -> bool {
        matches!(self, Self::List(_) | Self::Record(_))
    }
}

impl FieldAccess for Value {
    type Field = Value;

    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<CompactString> for Value {
    fn from(v: CompactString) -> Self {
        Self::Str(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        let mut buf = [0u8; 4];
        Self::Str(CompactString::from(v.encode_utf8(&mut buf) as &str))
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Self::list(items)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Lenient coercion into a sequence.
///
/// Lists diff element-wise, strings diff per character, anything else is a
/// one-element sequence.
impl From<Value> for Sequence<'_, Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Sequence::Owned(items),
            Value::Str(text) => text.chars().map(Value::from).collect(),
            other => Sequence::Single(other),
        }
    }
}

impl<'a> From<&'a Value> for Sequence<'a, Value> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::List(items) => Sequence::Borrowed(items),
            Value::Str(text) => text.chars().map(Value::from).collect(),
            other => Sequence::Single(other.clone()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
