//! DirectChaining: every value lands in its home slot's bucket.

use crate::bucket::Bucket;
use crate::equivalence::Equivalence;
use crate::policy::{home_slot, CollisionPolicy, InsertError, Slots};
use crate::value::ValueRef;
use log::trace;

/// Separate chaining over per-slot buckets. Never fails except on duplicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectChaining;

impl<const S: usize> CollisionPolicy<S> for DirectChaining {
    fn insert(
        store: &mut Slots<S>,
        value: ValueRef,
        equivalence: Equivalence,
    ) -> Result<usize, InsertError> {
        let slot = home_slot::<S>(&*value);
        if <Self as CollisionPolicy<S>>::contains(store, &value, equivalence) {
            trace!(target: "direct_chaining", "duplicate {:?} at slot {}", value, slot);
            return Err(InsertError::Duplicate { slot });
        }

        let bucket = store[slot].get_or_insert_with(Bucket::new);
        bucket.push(value);
        trace!(target: "direct_chaining", "slot {} now holds {} value(s)", slot, bucket.len());
        Ok(slot)
    }

    fn contains(store: &Slots<S>, value: &ValueRef, equivalence: Equivalence) -> bool {
        // Equivalent values share a hash code, so only the home bucket can hold one.
        store[home_slot::<S>(&**value)]
            .as_ref()
            .is_some_and(|b| b.iter().any(|v| equivalence.matches(v, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{numeric, text};

    fn empty<const S: usize>() -> Slots<S> {
        core::array::from_fn(|_| None)
    }

    /// Invariant: Colliding distinct values are all kept, in insertion order.
    #[test]
    fn collisions_chain_in_order() {
        let mut store = empty::<13>();
        let eq = Equivalence::Payload;
        assert_eq!(DirectChaining::insert(&mut store, numeric(5.5f32), eq), Ok(5));
        assert_eq!(DirectChaining::insert(&mut store, numeric(200u8), eq), Ok(5));
        assert_eq!(DirectChaining::insert(&mut store, numeric(-8i32), eq), Ok(5));

        let bucket = store[5].as_ref().expect("slot 5 occupied");
        assert_eq!(bucket.joined_display(), "5.5 200 -8");
        assert_eq!(store.iter().filter(|s| s.is_some()).count(), 1);
    }

    /// Invariant: A duplicate is rejected with its slot and leaves the store unchanged.
    #[test]
    fn duplicate_rejected_without_mutation() {
        let mut store = empty::<7>();
        let eq = Equivalence::Payload;
        let slot = DirectChaining::insert(&mut store, text("dup"), eq).unwrap();
        assert_eq!(
            DirectChaining::insert(&mut store, text("dup"), eq),
            Err(InsertError::Duplicate { slot })
        );
        assert_eq!(store[slot].as_ref().map(|b| b.len()), Some(1));
    }

    /// Invariant: `contains` reflects inserted values only.
    #[test]
    fn contains_parity() {
        let mut store = empty::<4>();
        let eq = Equivalence::Payload;
        let a = numeric(1u32);
        assert!(!DirectChaining::contains(&store, &a, eq));
        DirectChaining::insert(&mut store, a.clone(), eq).unwrap();
        assert!(DirectChaining::contains(&store, &a, eq));
        assert!(DirectChaining::contains(&store, &numeric(1u32), eq));
        // Same slot, different payload.
        assert!(!DirectChaining::contains(&store, &numeric(5u32), eq));
    }

    #[test]
    fn hash_function_is_normalized() {
        let v = numeric(-1i32);
        assert_eq!(<DirectChaining as CollisionPolicy<13>>::hash_function(&*v), 12);
    }
}
