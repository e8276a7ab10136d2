//! Hashable values: the capability the table stores, plus the numeric and
//! text variants.
//!
//! Values are immutable once built and shared with tables through
//! [`ValueRef`]. A table clones the `Rc` handle, never the payload.

use core::any::Any;
use core::fmt;
use std::hash::{DefaultHasher, Hasher};
use std::rc::Rc;

/// Shared, read-only handle to a hashable value.
pub type ValueRef = Rc<dyn HashValue>;

/// A value that can report a hash code and a display form.
///
/// `hash_code` must be a pure function of the payload: repeated calls return
/// the same integer and have no side effects.
pub trait HashValue: Any {
    fn hash_code(&self) -> i32;

    fn display(&self) -> String;

    /// Downcasting hook used by [`HashValue::payload_eq`] implementations.
    fn as_any(&self) -> &dyn Any;

    /// True iff `other` is the same concrete variant holding an equal payload.
    fn payload_eq(&self, other: &dyn HashValue) -> bool;
}

impl fmt::Debug for dyn HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.display(), self.hash_code())
    }
}

/// Primitive numbers that can back a [`Numeric`] value.
pub trait Number: Copy + PartialEq + fmt::Display + fmt::Debug + 'static {
    /// Converts with `as i32` semantics: floats truncate toward zero and
    /// saturate (NaN becomes 0), integers keep their low 32 bits.
    fn truncate(self) -> i32;
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                #[inline]
                fn truncate(self) -> i32 {
                    self as i32
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A numeric payload. Its hash code is the payload truncated to `i32`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Numeric<T: Number> {
    val: T,
}

impl<T: Number> Numeric<T> {
    pub fn new(val: T) -> Self {
        Self { val }
    }

    pub fn get(&self) -> T {
        self.val
    }
}

impl<T: Number> HashValue for Numeric<T> {
    fn hash_code(&self) -> i32 {
        self.val.truncate()
    }

    fn display(&self) -> String {
        self.val.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn payload_eq(&self, other: &dyn HashValue) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.val == self.val)
    }
}

/// A text payload hashed with SipHash over its UTF-8 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    val: Rc<str>,
}

impl Text {
    pub fn new(val: impl Into<Rc<str>>) -> Self {
        Self { val: val.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.val
    }
}

impl HashValue for Text {
    fn hash_code(&self) -> i32 {
        // DefaultHasher::new() uses fixed keys, so this is stable across runs.
        let mut h = DefaultHasher::new();
        h.write(self.val.as_bytes());
        h.finish() as i32
    }

    fn display(&self) -> String {
        self.val.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn payload_eq(&self, other: &dyn HashValue) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|o| o.val == self.val)
    }
}

/// Wraps a number into a shared [`ValueRef`].
pub fn numeric<T: Number>(val: T) -> ValueRef {
    Rc::new(Numeric::new(val))
}

/// Wraps a string into a shared [`ValueRef`].
pub fn text(val: impl Into<Rc<str>>) -> ValueRef {
    Rc::new(Text::new(val))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: Floats truncate toward zero, including negative fractions.
    #[test]
    fn float_hash_code_truncates_toward_zero() {
        assert_eq!(Numeric::new(5.5f32).hash_code(), 5);
        assert_eq!(Numeric::new(-5.9f64).hash_code(), -5);
        assert_eq!(Numeric::new(0.99f32).hash_code(), 0);
        assert_eq!(Numeric::new(f64::NAN).hash_code(), 0);
        assert_eq!(Numeric::new(1e20f64).hash_code(), i32::MAX);
    }

    /// Invariant: Narrow unsigned payloads hash to their bit value; wide
    /// integers keep their low 32 bits.
    #[test]
    fn integer_hash_code_keeps_bit_value() {
        assert_eq!(Numeric::new(200u8).hash_code(), 200);
        assert_eq!(Numeric::new(-3i8).hash_code(), -3);
        assert_eq!(Numeric::new(u32::MAX).hash_code(), -1);
        assert_eq!(Numeric::new((1i64 << 32) + 7).hash_code(), 7);
    }

    /// Invariant: `display` uses the canonical decimal form and is stable.
    #[test]
    fn numeric_display_is_canonical_and_stable() {
        let v = Numeric::new(5.5f32);
        assert_eq!(v.display(), "5.5");
        assert_eq!(v.display(), v.display());
        assert_eq!(Numeric::new(200u8).display(), "200");
        assert_eq!(Numeric::new(-42i64).display(), "-42");
        assert_eq!(Numeric::new(5.5f32).get(), 5.5);
    }

    /// Invariant: Text displays verbatim and hashes deterministically.
    #[test]
    fn text_display_and_hash_are_deterministic() {
        let a = Text::new("hello world");
        let b = Text::new(String::from("hello world"));
        assert_eq!(a.display(), "hello world");
        assert_eq!(a.as_str(), "hello world");
        assert_eq!(a.hash_code(), a.hash_code());
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a.hash_code(), Text::new("hey").hash_code());
    }

    /// Invariant: Payload equality requires the same concrete variant.
    #[test]
    fn payload_eq_requires_same_variant() {
        let a = Numeric::new(7u8);
        assert!(a.payload_eq(&Numeric::new(7u8)));
        assert!(!a.payload_eq(&Numeric::new(8u8)));
        assert!(!a.payload_eq(&Numeric::new(7i64)));
        assert!(!a.payload_eq(&Text::new("7")));
        assert!(Text::new("x").payload_eq(&Text::new("x")));
        assert!(!Numeric::new(f64::NAN).payload_eq(&Numeric::new(f64::NAN)));
    }

    #[test]
    fn debug_shows_display_and_hash() {
        let v = numeric(12i32);
        assert_eq!(format!("{:?}", v), "12#12");
    }
}
