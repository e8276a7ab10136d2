//! LinearProbing: open addressing with one value per slot.

use crate::bucket::Bucket;
use crate::equivalence::Equivalence;
use crate::policy::{home_slot, CollisionPolicy, InsertError, Slots};
use crate::value::ValueRef;
use log::trace;

/// Probes `home, home + 1, ...` with wrap-around until a free slot is found.
///
/// Occupied slots hold single-value buckets. Because nothing is ever
/// removed, a probe that reaches an empty slot proves absence.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearProbing;

/// Slots visited from `home`, wrapping once around the table.
fn probe_sequence<const S: usize>(home: usize) -> impl Iterator<Item = usize> {
    (0..S).map(move |step| (home + step) % S)
}

impl<const S: usize> CollisionPolicy<S> for LinearProbing {
    fn insert(
        store: &mut Slots<S>,
        value: ValueRef,
        equivalence: Equivalence,
    ) -> Result<usize, InsertError> {
        let home = home_slot::<S>(&*value);
        for slot in probe_sequence::<S>(home) {
            let Some(b) = &store[slot] else {
                let mut bucket = Bucket::new();
                bucket.push(value);
                store[slot] = Some(bucket);
                trace!(target: "linear_probing", "home {} placed at slot {}", home, slot);
                return Ok(slot);
            };
            if b.iter().any(|v| equivalence.matches(v, &value)) {
                trace!(target: "linear_probing", "duplicate {:?} at slot {}", value, slot);
                return Err(InsertError::Duplicate { slot });
            }
        }
        trace!(target: "linear_probing", "no free slot for {:?}", value);
        Err(InsertError::TableFull { capacity: S })
    }

    fn contains(store: &Slots<S>, value: &ValueRef, equivalence: Equivalence) -> bool {
        for slot in probe_sequence::<S>(home_slot::<S>(&**value)) {
            match &store[slot] {
                None => return false,
                Some(b) if b.iter().any(|v| equivalence.matches(v, value)) => return true,
                Some(_) => {}
            }
        }
        false
    }
}
