use crate::value::Value;
use std::collections::HashMap;
use std::iter::FromIterator;

/// Flat table of symbol bindings, owned by whoever drives evaluation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.store.get(name).cloned()
    }

    pub fn set(&mut self, name: &str, val: Value) {
        self.store.insert(name.to_owned(), val);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            store: iter.into_iter().collect(),
        }
    }
}
