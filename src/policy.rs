//! CollisionPolicy: the pluggable strategy that maps values to slots and
//! mutates the table's backing store.

use crate::bucket::Bucket;
use crate::equivalence::Equivalence;
use crate::value::{HashValue, ValueRef};
use thiserror::Error;

/// Backing store of a table with `S` slots. `None` marks a slot that never
/// received a value.
pub type Slots<const S: usize> = [Option<Bucket>; S];

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    /// An equivalent value is already stored at `slot`.
    #[error("equivalent value already stored at slot {slot}")]
    Duplicate { slot: usize },
    /// Every slot is taken; only open-addressing policies report this.
    #[error("no free slot left in table of capacity {capacity}")]
    TableFull { capacity: usize },
}

/// Maps a hash code into `[0, capacity)`.
///
/// Uses the Euclidean remainder, so negative hash codes still land in range.
/// Panics if `capacity` is zero.
#[inline]
pub fn slot_for(hash_code: i32, capacity: usize) -> usize {
    assert!(capacity > 0, "slot_for: capacity must be non-zero");
    i64::from(hash_code).rem_euclid(capacity as i64) as usize
}

/// Home slot of `value` in a table of `S` slots. `S == 0` fails to compile.
#[inline]
pub(crate) fn home_slot<const S: usize>(value: &dyn HashValue) -> usize {
    const { assert!(S > 0, "hash table capacity must be non-zero") };
    slot_for(value.hash_code(), S)
}

/// Collision-resolution strategy for a table of `S` slots.
///
/// Policies are stateless; the table hands them its store for each call.
/// Implementations must only touch indices in `[0, S)`.
pub trait CollisionPolicy<const S: usize> {
    /// Home slot of `value`, always in `[0, S)`.
    fn hash_function(value: &dyn HashValue) -> usize {
        home_slot::<S>(value)
    }

    /// Records `value` and returns the slot it was stored in.
    fn insert(
        store: &mut Slots<S>,
        value: ValueRef,
        equivalence: Equivalence,
    ) -> Result<usize, InsertError>;

    fn contains(store: &Slots<S>, value: &ValueRef, equivalence: Equivalence) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: Slots are in range for negative and extreme hash codes.
    #[test]
    fn slot_for_normalizes_negative_codes() {
        assert_eq!(slot_for(5, 13), 5);
        assert_eq!(slot_for(200, 13), 5);
        assert_eq!(slot_for(-3, 13), 10);
        assert_eq!(slot_for(-13, 13), 0);
        assert_eq!(slot_for(i32::MIN, 13), (i32::MIN as i64).rem_euclid(13) as usize);
        assert_eq!(slot_for(i32::MAX, 1), 0);
    }

    #[test]
    #[should_panic(expected = "capacity must be non-zero")]
    fn slot_for_rejects_zero_capacity() {
        let _ = slot_for(1, 0);
    }

    #[test]
    fn insert_error_messages() {
        assert_eq!(
            InsertError::Duplicate { slot: 4 }.to_string(),
            "equivalent value already stored at slot 4"
        );
        assert_eq!(
            InsertError::TableFull { capacity: 3 }.to_string(),
            "no free slot left in table of capacity 3"
        );
    }
}
