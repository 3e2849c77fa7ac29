//! Request method and form fields

use rustc_hash::FxHashMap;

/// Request method of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// Named string fields submitted with a turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: FxHashMap<String, String>,
}

impl Form {
    /// Build a form from `(name, value)` pairs; later duplicates win
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Value of `name`, or `None` if the field was not sent
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}
