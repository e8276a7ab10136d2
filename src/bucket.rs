//! Bucket: the insertion-ordered values of one slot.

use crate::value::{HashValue, ValueRef};

/// Values mapped to one slot, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Bucket {
    values: Vec<ValueRef>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&ValueRef> {
        self.values.get(i)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ValueRef> {
        self.values.iter()
    }

    /// Appends a value. Only policies get mutable access to buckets.
    pub fn push(&mut self, value: ValueRef) {
        self.values.push(value);
    }

    /// Space-separated display forms, in insertion order.
    pub fn joined_display(&self) -> String {
        self.values
            .iter()
            .map(|v| v.display())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a ValueRef;
    type IntoIter = core::slice::Iter<'a, ValueRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
