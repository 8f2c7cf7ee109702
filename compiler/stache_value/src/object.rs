//! Object payload: unique names mapped to values.

use rustc_hash::FxHashMap;

use crate::Value;

/// Members of an object value.
///
/// Keys are unique and iteration order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    members: FxHashMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Object::default()
    }

    /// Insert or overwrite a member, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.insert(name.into(), value.into())
    }

    /// Look up a member.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Returns `true` if a member with this name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Remove a member.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.members.remove(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (name, value) in iter {
            object.insert(name, value);
        }
        object
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
