//! HashTable: fixed-capacity store that delegates slot mechanics to a
//! [`CollisionPolicy`].

use crate::bucket::Bucket;
use crate::direct_chaining::DirectChaining;
use crate::equivalence::Equivalence;
use crate::policy::{CollisionPolicy, InsertError, Slots};
use crate::value::{HashValue, ValueRef};
use core::fmt;
use core::marker::PhantomData;
use log::debug;

/// A table of exactly `S` slots. Slots start empty and become occupied on
/// their first insertion; they never go back to empty.
pub struct HashTable<const S: usize, P = DirectChaining> {
    table: Slots<S>,
    equivalence: Equivalence,
    _policy: PhantomData<P>,
}

/// Table using separate chaining.
pub type ChainedTable<const S: usize> = HashTable<S, DirectChaining>;

impl<const S: usize, P> HashTable<S, P>
where
    P: CollisionPolicy<S>,
{
    pub fn new() -> Self {
        Self::with_equivalence(Equivalence::default())
    }

    /// Creates an empty table that detects duplicates with `equivalence`.
    pub fn with_equivalence(equivalence: Equivalence) -> Self {
        const { assert!(S > 0, "hash table capacity must be non-zero") };
        Self {
            table: core::array::from_fn(|_| None),
            equivalence,
            _policy: PhantomData,
        }
    }

    /// Home slot of `value` under policy `P`; needs no table instance.
    pub fn hash_function(value: &dyn HashValue) -> usize {
        P::hash_function(value)
    }

    /// Stores `value` and returns its slot, or why it was not stored.
    pub fn insert(&mut self, value: ValueRef) -> Result<usize, InsertError> {
        let shown = value.display();
        let res = P::insert(&mut self.table, value, self.equivalence);
        debug!(target: "hash_table", "insert {:?} -> {:?}", shown, res);
        res
    }

    pub fn contains(&self, value: &ValueRef) -> bool {
        P::contains(&self.table, value, self.equivalence)
    }

    /// Read-only view of all `S` slots.
    pub fn snapshot(&self) -> &Slots<S> {
        &self.table
    }

    pub fn bucket(&self, slot: usize) -> Option<&Bucket> {
        self.table.get(slot)?.as_ref()
    }

    pub const fn capacity(&self) -> usize {
        S
    }

    pub fn equivalence(&self) -> Equivalence {
        self.equivalence
    }

    /// Number of stored values across all buckets.
    pub fn len(&self) -> usize {
        self.table.iter().flatten().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Option::is_none)
    }

    pub fn occupied_slots(&self) -> usize {
        self.table.iter().filter(|s| s.is_some()).count()
    }

    /// Yields `(slot, value)` slot by slot, bucket order within a slot.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.table.iter().enumerate(),
            current: None,
        }
    }
}

impl<const S: usize, P> Default for HashTable<S, P>
where
    P: CollisionPolicy<S>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize, P> fmt::Debug for HashTable<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &S)
            .field("equivalence", &self.equivalence)
            .field("table", &self.table)
            .finish()
    }
}

/// One line per slot: `[i]: { a b }`, or `[i]: {  }` when empty.
impl<const S: usize, P> fmt::Display for HashTable<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.table.iter().enumerate() {
            let shown = slot.as_ref().map(Bucket::joined_display).unwrap_or_default();
            writeln!(f, "[{}]: {{ {} }}", i, shown)?;
        }
        Ok(())
    }
}

/// Iterator over stored values, see [`HashTable::iter`].
pub struct Iter<'a> {
    slots: core::iter::Enumerate<core::slice::Iter<'a, Option<Bucket>>>,
    current: Option<(usize, core::slice::Iter<'a, ValueRef>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a ValueRef);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((slot, values)) = &mut self.current {
                if let Some(v) = values.next() {
                    return Some((*slot, v));
                }
            }
            let (slot, bucket) = self.slots.next()?;
            self.current = bucket.as_ref().map(|b| (slot, b.iter()));
        }
    }
}

impl<'a, const S: usize, P> IntoIterator for &'a HashTable<S, P>
where
    P: CollisionPolicy<S>,
{
    type Item = (usize, &'a ValueRef);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
