//! Field accessors over a root block or a group entry
//!
//! Offset selalu relatif terhadap awal block. Field dengan `since` hanya ada
//! jika versi message >= since; di bawah itu getter mengembalikan `None`
//! dan setter gagal dengan `DisallowedField`.

use super::error::{Error, Result};
use super::header::SchemaVersion;
use super::primitive::{Primitive, StrRef, NULL_CHAR};

/// Enumeration stored as its base integer (or ASCII char) on the wire.
pub trait SbeEnum: Copy + Sized {
    type Base: Primitive + PartialEq + Into<u64>;

    const TYPE_NAME: &'static str;

    /// Values are ASCII chars rather than integers.
    const CHAR_BASED: bool;

    fn from_base(value: Self::Base) -> Option<Self>;

    fn to_base(self) -> Self::Base;
}

/// Fixed-size composite type decoded by value.
pub trait Composite: Copy + Sized {
    const SIZE: usize;

    fn decode(buf: &[u8]) -> Self;

    fn encode(&self, buf: &mut [u8]);
}

/// Composite that may carry its own null value.
pub trait NullableComposite: Composite {
    const NULL: Self;

    fn is_null(&self) -> bool;
}

/// Read access to the fields of a block.
pub trait SbeFields {
    /// Bytes of the block, starting at offset 0 of the field layout.
    fn block(&self) -> &[u8];

    /// Schema version the block is encoded with.
    fn version(&self) -> SchemaVersion;

    #[inline(always)]
    fn ordinary<T: Primitive>(&self, offset: usize) -> T {
        T::read_le(&self.block()[offset..])
    }

    #[inline(always)]
    fn optional<T: Primitive + PartialEq>(
        &self,
        offset: usize,
        null: T,
        since: SchemaVersion,
    ) -> Option<T> {
        if since > self.version() {
            return None;
        }
        let value = self.ordinary::<T>(offset);
        (value != null).then_some(value)
    }

    #[inline(always)]
    fn enumeration<E: SbeEnum>(&self, offset: usize) -> Result<E> {
        let raw = self.ordinary::<E::Base>(offset);
        E::from_base(raw).ok_or(Error::InvalidEnumValue {
            type_name: E::TYPE_NAME,
            value: raw.into(),
        })
    }

    #[inline(always)]
    fn optional_enumeration<E: SbeEnum>(
        &self,
        offset: usize,
        null: E::Base,
        since: SchemaVersion,
    ) -> Result<Option<E>> {
        match self.optional::<E::Base>(offset, null, since) {
            Some(raw) => E::from_base(raw).map(Some).ok_or(Error::InvalidEnumValue {
                type_name: E::TYPE_NAME,
                value: raw.into(),
            }),
            None => Ok(None),
        }
    }

    #[inline(always)]
    fn fixed_str(&self, offset: usize, length: usize) -> StrRef<'_> {
        StrRef::from_fixed(&self.block()[offset..offset + length])
    }

    /// Char fields are ASCII; NUL means null.
    #[inline(always)]
    fn char_field(&self, offset: usize) -> Option<char> {
        let raw = self.ordinary::<u8>(offset);
        (raw != NULL_CHAR).then_some(raw as char)
    }

    #[inline(always)]
    fn composite<C: Composite>(&self, offset: usize) -> C {
        C::decode(&self.block()[offset..offset + C::SIZE])
    }

    #[inline(always)]
    fn optional_composite<C: NullableComposite>(
        &self,
        offset: usize,
        since: SchemaVersion,
    ) -> Option<C> {
        if since > self.version() {
            return None;
        }
        let value = self.composite::<C>(offset);
        (!value.is_null()).then_some(value)
    }
}

/// Write access to the fields of a block.
pub trait SbeFieldsMut: SbeFields {
    fn block_mut(&mut self) -> &mut [u8];

    #[inline(always)]
    fn set_ordinary<T: Primitive>(&mut self, offset: usize, value: T) {
        value.write_le(&mut self.block_mut()[offset..]);
    }

    /// Fails when the field is newer than the block's version.
    #[inline(always)]
    fn check_since(&self, field: &'static str, since: SchemaVersion) -> Result<()> {
        let version = self.version();
        if since > version {
            return Err(Error::DisallowedField {
                field,
                since,
                version,
            });
        }
        Ok(())
    }

    #[inline(always)]
    fn set_enumeration<E: SbeEnum>(&mut self, offset: usize, value: E) {
        self.set_ordinary(offset, value.to_base());
    }

    /// Writes `value` zero-padded to `length` bytes.
    fn set_fixed_str(
        &mut self,
        field: &'static str,
        offset: usize,
        length: usize,
        value: &str,
    ) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > length {
            return Err(Error::ValueTooLong {
                field,
                length: bytes.len(),
                capacity: length,
            });
        }
        let dst = &mut self.block_mut()[offset..offset + length];
        dst[..bytes.len()].copy_from_slice(bytes);
        dst[bytes.len()..].fill(NULL_CHAR);
        Ok(())
    }

    #[inline(always)]
    fn set_composite<C: Composite>(&mut self, offset: usize, value: &C) {
        value.encode(&mut self.block_mut()[offset..offset + C::SIZE]);
    }

    /// Zeroes `length` bytes of padding at `offset`.
    #[inline(always)]
    fn zero_padding(&mut self, offset: usize, length: usize) {
        self.block_mut()[offset..offset + length].fill(0);
    }
}
