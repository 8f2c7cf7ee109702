//! The [`Value`] sum type and its queries.

use std::fmt;

use crate::{Object, ValueError};

/// Kind tag of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    String,
    List,
    True,
    False,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::True => "true",
            ValueKind::False => "false",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data rendered by a template.
///
/// Booleans are two markers rather than a `bool` payload: section rendering
/// only ever asks "is this `False`?", and `True` carries nothing to push as
/// a scope.
///
/// Values own their payloads. Inserting into an object or pushing onto a
/// list moves (or clones) the whole subtree; renderers only ever borrow.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Object(Object),
    String(String),
    List(Vec<Value>),
    True,
    False,
}

impl Default for Value {
    fn default() -> Self {
        Value::Object(Object::new())
    }
}

impl Value {
    // Construction

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// An empty list.
    pub fn list() -> Self {
        Value::List(Vec::new())
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Builder form of [`set`](Value::set) for object literals.
    ///
    /// Non-objects are returned unchanged.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Value::Object(object) = &mut self {
            object.insert(name, value);
        }
        self
    }

    // Type info

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::True => ValueKind::True,
            Value::False => ValueKind::False,
        }
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::True | Value::False)
    }

    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Value::True)
    }

    #[inline]
    pub fn is_false(&self) -> bool {
        matches!(self, Value::False)
    }

    #[inline]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(items) if items.is_empty())
    }

    #[inline]
    pub fn is_non_empty_list(&self) -> bool {
        matches!(self, Value::List(items) if !items.is_empty())
    }

    /// `False` and the empty list are falsy; every other value is truthy.
    #[inline]
    pub fn is_falsy(&self) -> bool {
        self.is_false() || self.is_empty_list()
    }

    // Object data

    /// Insert or overwrite a member of an object.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), ValueError> {
        match self {
            Value::Object(object) => {
                object.insert(name, value);
                Ok(())
            }
            other => Err(ValueError::InvalidAccess {
                expected: ValueKind::Object,
                found: other.kind(),
            }),
        }
    }

    /// Look up a member. Non-objects have no members.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(object) => object.get(name),
            _ => None,
        }
    }

    /// Returns `true` if this is an object with a member called `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains(name))
    }

    // List data

    /// Append to a list.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), ValueError> {
        match self {
            Value::List(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(ValueError::InvalidAccess {
                expected: ValueKind::List,
                found: other.kind(),
            }),
        }
    }

    /// Element `index` of a list.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Number of list elements or object members, or string length in bytes.
    /// Booleans have length zero.
    pub fn len(&self) -> usize {
        match self {
            Value::Object(object) => object.len(),
            Value::String(s) => s.len(),
            Value::List(items) => items.len(),
            Value::True | Value::False => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Payload access

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
