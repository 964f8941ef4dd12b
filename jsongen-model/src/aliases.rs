//! Registry of decoder requirements for custom types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maps a custom type name to the type parameters whose decoders its
/// `decode` routine expects from the caller, in order.
///
/// Built from every parsed source file, then shared read-only by all
/// generation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeAliases {
    entries: IndexMap<String, Vec<String>>,
}

impl TypeAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the decoder parameters of a type.
    pub fn insert(&mut self, name: impl Into<String>, params: Vec<String>) {
        self.entries.insert(name.into(), params);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, params: &[&str]) -> Self {
        self.insert(name, params.iter().map(|p| p.to_string()).collect());
        self
    }

    /// The decoder parameters of `name`, if registered.
    pub fn decoder_params(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, params)| (name.as_str(), params.as_slice()))
    }

    /// Merge another registry into this one. Later entries win.
    pub fn merge(&mut self, other: &TypeAliases) {
        for (name, params) in other.iter() {
            self.entries.insert(name.to_string(), params.to_vec());
        }
    }
}

impl FromIterator<(String, Vec<String>)> for TypeAliases {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
