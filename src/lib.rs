//! fixed-hashtable: a fixed-capacity hash table with pluggable collision
//! policies over shared, heterogeneous values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep table mechanics and collision resolution independent so a
//!   strategy can be swapped without touching the container.
//! - Layers:
//!   - HashValue: capability implemented by `Numeric<T>` and `Text`; reports
//!     an `i32` hash code and a display form. Stored as `Rc<dyn HashValue>`.
//!   - CollisionPolicy<S>: stateless strategy that computes the home slot and
//!     mutates the backing store (`DirectChaining`, `LinearProbing`).
//!   - HashTable<S, P>: owns `[Option<Bucket>; S]`, delegates every insert
//!     and lookup to `P`, and renders itself one line per slot.
//!
//! Constraints
//! - Single-threaded: values are `Rc`, so tables are `!Send`/`!Sync`.
//! - Capacity is a const generic and never changes. `S == 0` is a compile
//!   error.
//! - No removal and no rehashing; a slot goes from empty to occupied once.
//! - Slot indices are normalized with the Euclidean remainder, so negative
//!   hash codes stay in `[0, S)`.
//!
//! Duplicates
//! - `Equivalence` picks the rule: allocation identity, payload equality
//!   (default), or equal hash code plus display form.
//! - Every rule implies equal hash codes, so equivalent values share a home
//!   slot and policies only search from there.
//! - A duplicate insert returns `InsertError::Duplicate`; it is never
//!   confused with a slot index.
//!
//! Rendering
//! - `Display` prints `[i]: { v1 v2 }` for each slot, `[i]: {  }` when
//!   empty, each line terminated by a newline.

pub mod bucket;
pub mod direct_chaining;
pub mod equivalence;
pub mod hash_table;
mod hash_table_proptest;
pub mod linear_probing;
pub mod policy;
pub mod value;

// Public surface
pub use bucket::Bucket;
pub use direct_chaining::DirectChaining;
pub use equivalence::Equivalence;
pub use hash_table::{ChainedTable, HashTable};
pub use linear_probing::LinearProbing;
pub use policy::{slot_for, CollisionPolicy, InsertError, Slots};
pub use value::{numeric, text, HashValue, Number, Numeric, Text, ValueRef};
