//! Leaf type vocabularies.

use serde::{Deserialize, Serialize};

/// The closed lists of type names with fixed decoding behavior.
///
/// Names in `known` are reinterpreted without any check. Names in `cast`
/// are decoded with a checked downcast. Every other name is a custom type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub known: Vec<String>,
    pub cast: Vec<String>,
}

impl Vocabulary {
    pub fn new(known: &[&str], cast: &[&str]) -> Self {
        Self {
            known: known.iter().map(|s| s.to_string()).collect(),
            cast: cast.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known.iter().any(|k| k == name)
    }

    pub fn is_cast(&self, name: &str) -> bool {
        self.cast.iter().any(|c| c == name)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(&["AnyObject", "AnyJson"], &["JsonObject", "JsonArray"])
    }
}
