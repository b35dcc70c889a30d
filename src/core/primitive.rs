//! Little-endian primitives dan null sentinels
//!
//! Semua field SBE dibaca/ditulis langsung di offset tetap dalam buffer.

use std::fmt;

use super::error::{Error, Result};

/// A fixed-size value stored little-endian on the wire.
pub trait Primitive: Copy {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Reads the value from the first `SIZE` bytes of `buf`.
    fn read_le(buf: &[u8]) -> Self;

    /// Writes the value into the first `SIZE` bytes of `buf`.
    fn write_le(self, buf: &mut [u8]);
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn read_le(buf: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&buf[..Self::SIZE]);
                    <$ty>::from_le_bytes(raw)
                }

                #[inline(always)]
                fn write_le(self, buf: &mut [u8]) {
                    buf[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_primitive!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Null value of char fields.
pub const NULL_CHAR: u8 = 0;
pub const NULL_UINT8: u8 = u8::MAX;
pub const NULL_UINT16: u16 = u16::MAX;
pub const NULL_UINT32: u32 = u32::MAX;
pub const NULL_UINT64: u64 = u64::MAX;
pub const NULL_INT8: i8 = i8::MIN;
pub const NULL_INT16: i16 = i16::MIN;
pub const NULL_INT32: i32 = i32::MIN;
pub const NULL_INT64: i64 = i64::MIN;

/// Borrowed string view over a fixed-length or var-data field.
///
/// BOE strings are ASCII; bytes are kept as-is and validated only on
/// [`StrRef::to_str`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrRef<'a>(&'a [u8]);

impl<'a> StrRef<'a> {
    #[inline(always)]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// View of a fixed-length field: bytes up to the first NUL.
    #[inline(always)]
    pub fn from_fixed(bytes: &'a [u8]) -> Self {
        let len = bytes.iter().position(|&b| b == NULL_CHAR).unwrap_or(bytes.len());
        Self(&bytes[..len])
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Empty string is the null value of fixed-length strings.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.0).map_err(|_| Error::BadConversion { field: "StrRef" })
    }
}

impl fmt::Debug for StrRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.0))
    }
}

impl fmt::Display for StrRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0))
    }
}

impl PartialEq<str> for StrRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for StrRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_le_layout() {
        let mut buf = [0u8; 8];
        0x0102_0304u32.write_le(&mut buf);
        assert_eq!(&buf[..4], &[4, 3, 2, 1]);
        assert_eq!(u32::read_le(&buf), 0x0102_0304);

        (-2i64).write_le(&mut buf);
        assert_eq!(i64::read_le(&buf), -2);
    }

    #[test]
    fn test_fixed_str_stops_at_nul() {
        let raw = *b"DMA\0\0\0\0\0\0\0";
        let s = StrRef::from_fixed(&raw);
        assert_eq!(s, "DMA");
        assert_eq!(s.len(), 3);
        assert!(StrRef::from_fixed(&[0u8; 5]).is_empty());
    }

    #[test]
    fn test_full_width_fixed_str() {
        let s = StrRef::from_fixed(b"TRADE");
        assert_eq!(s.to_str().unwrap(), "TRADE");
    }
}
