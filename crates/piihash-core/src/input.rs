//! # Input Adapters
//!
//! Callers hand values to this crate from many shapes: string literals,
//! owned strings, and optional fields deserialized from a record. The
//! [`FieldInput`] and [`ByteInput`] traits let every operation accept
//! all of them while still distinguishing an absent value (`None`) from
//! an empty one.

/// A value that may be absent, viewed as a string slice.
pub trait FieldInput {
    /// The string view, or `None` when the value is absent.
    fn value(&self) -> Option<&str>;
}

impl FieldInput for str {
    fn value(&self) -> Option<&str> {
        Some(self)
    }
}

impl FieldInput for String {
    fn value(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: FieldInput + ?Sized> FieldInput for &T {
    fn value(&self) -> Option<&str> {
        (**self).value()
    }
}

impl<T: FieldInput> FieldInput for Option<T> {
    fn value(&self) -> Option<&str> {
        self.as_ref().and_then(FieldInput::value)
    }
}

/// A byte sequence that may be absent.
pub trait ByteInput {
    /// The byte view, or `None` when the value is absent.
    fn bytes(&self) -> Option<&[u8]>;
}

impl ByteInput for [u8] {
    fn bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteInput for Vec<u8> {
    fn bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl<const N: usize> ByteInput for [u8; N] {
    fn bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl<T: ByteInput + ?Sized> ByteInput for &T {
    fn bytes(&self) -> Option<&[u8]> {
        (**self).bytes()
    }
}

impl<T: ByteInput> ByteInput for Option<T> {
    fn bytes(&self) -> Option<&[u8]> {
        self.as_ref().and_then(ByteInput::bytes)
    }
}
