use indexmap::IndexMap;
use serde_json::Value;

/// A decoded, statically shaped value.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A leaf value, kept in its JSON form.
    Json(Value),
    Optional(Option<Box<Decoded>>),
    Array(Vec<Decoded>),
    Dictionary(IndexMap<String, Decoded>),
    Record(Record),
}

impl Decoded {
    pub fn json(value: impl Into<Value>) -> Self {
        Self::Json(value.into())
    }

    pub fn none() -> Self {
        Self::Optional(None)
    }

    pub fn some(inner: Decoded) -> Self {
        Self::Optional(Some(Box::new(inner)))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Decoded]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Record> for Decoded {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// A constructed record: its name and field values in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub fields: IndexMap<String, Decoded>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: Decoded) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Decoded> {
        self.fields.get(field)
    }
}
