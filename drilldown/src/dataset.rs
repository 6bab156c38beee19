//! The tree dataset the navigator walks.
//!
//! A dataset is an ordered sequence of entries. Each entry pairs the
//! link data shown on its row with either a nested dataset (a branch)
//! or a terminal record (a leaf). The shape is enforced by the type
//! system, so no runtime validation of entry shapes exists.

/// Ordered, opaque key/value data: link data, terminal records, and
/// the base model merged into every template binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insert.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a field, preserving insertion order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge `overrides` over this record: own fields first, override
    /// fields replacing or appending. Entry data wins over the base model.
    pub fn merged(&self, overrides: &Record) -> Record {
        let mut out = self.clone();
        for (k, v) in &overrides.fields {
            out.set(k.clone(), v.clone());
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What lies behind an entry's link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    /// A nested dataset: clicking the link drills down one level.
    Branch(Vec<Entry>),
    /// A terminal record: clicking the link selects it.
    Leaf(Record),
}

/// One `(link data, children)` pair in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub link: Record,
    pub children: Children,
}

impl Entry {
    pub fn branch(link: Record, children: Vec<Entry>) -> Self {
        Self {
            link,
            children: Children::Branch(children),
        }
    }

    pub fn leaf(link: Record, record: Record) -> Self {
        Self {
            link,
            children: Children::Leaf(record),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf(_))
    }
}

/// A whole navigable tree, supplied wholesale at reset time.
pub type Dataset = Vec<Entry>;
