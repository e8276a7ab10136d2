//! Duplicate detection rules.

use crate::value::{HashValue, ValueRef};
use std::rc::Rc;

/// Decides when two stored values count as the same entry.
///
/// Every mode implies equal hash codes, so equivalent values always share a
/// home slot. Policies rely on this to keep `contains` local.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Same allocation.
    Identity,
    /// Same concrete value type and equal payload.
    #[default]
    Payload,
    /// Equal hash code and equal display form, regardless of value type.
    HashAndDisplay,
}

impl Equivalence {
    pub fn matches(self, a: &ValueRef, b: &ValueRef) -> bool {
        match self {
            Equivalence::Identity => Rc::ptr_eq(a, b),
            Equivalence::Payload => a.payload_eq(&**b),
            Equivalence::HashAndDisplay => {
                a.hash_code() == b.hash_code() && a.display() == b.display()
            }
        }
    }
}
