//! BOE schema identity and the typed message contract
//!
//! Semua message di-generate oleh `sbe_message!` dan mengimplementasikan
//! [`BoeMessage`]; holder, batch dan typed dispatch bekerja lewat trait ini.

use std::fmt;

use crate::core::{Error, NumInGroup, Result, SchemaId, SchemaVersion, TemplateId};

use super::fields::MessageType;

pub const SCHEMA_ID: SchemaId = 1;
/// Latest schema version this crate encodes.
pub const SCHEMA_VERSION: SchemaVersion = 5;
/// Oldest schema version still accepted on decode.
pub const MINIMAL_SCHEMA_VERSION: SchemaVersion = 3;
pub const SEMANTIC_VERSION: &str = "8.3.2";
pub const SCHEMA_DESCRIPTION: &str = "B3 Binary Entrypoint FIXP messages";

/// Entries per group assumed when sizing owned message buffers.
pub const DEFAULT_MAX_GROUP_ITEMS: NumInGroup = 100;

/// Versions a message can be initialized with.
pub fn check_version(version: SchemaVersion) -> Result<()> {
    if !(MINIMAL_SCHEMA_VERSION..=SCHEMA_VERSION).contains(&version) {
        return Err(Error::BadMessageVersion {
            version,
            minimal: MINIMAL_SCHEMA_VERSION,
            maximal: SCHEMA_VERSION,
        });
    }
    Ok(())
}

/// A typed BOE message over a buffer `B`.
pub trait BoeMessage<B: AsRef<[u8]>>: Sized {
    const TEMPLATE_ID: TemplateId;
    const MESSAGE_TYPE: MessageType;
    const CLASS_NAME: &'static str;

    /// Wraps (and validates) an encoded message.
    fn wrap(buf: B) -> Result<Self>;

    fn max_binary_size(max_group_items: NumInGroup) -> usize;

    fn calculate_binary_size(&self) -> usize;

    fn inner(&self) -> &B;

    fn into_inner(self) -> B;
}

/// A typed BOE message over a writable buffer.
pub trait BoeMessageMut<B: AsRef<[u8]> + AsMut<[u8]>>: BoeMessage<B> {
    /// Initializes a fresh message of the given schema version.
    fn with_version(buf: B, version: SchemaVersion) -> Result<Self>;

    fn inner_mut(&mut self) -> &mut B;
}

/// Debug adaptor for decoded enum values: prints the value, or the error
/// when the wire holds an unknown discriminant.
#[doc(hidden)]
pub struct Decoded<T>(pub Result<T>);

impl<T: fmt::Debug> fmt::Debug for Decoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(value) => fmt::Debug::fmt(value, f),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_version_range() {
        assert!(check_version(3).is_ok());
        assert!(check_version(5).is_ok());
        assert_eq!(
            check_version(2),
            Err(Error::BadMessageVersion {
                version: 2,
                minimal: 3,
                maximal: 5
            })
        );
        assert!(check_version(6).is_err());
    }

    #[test]
    fn test_decoded_debug() {
        assert_eq!(format!("{:?}", Decoded(Ok(7u8))), "7");
        let err: Result<u8> = Err(Error::InvalidEnumValue {
            type_name: "Side",
            value: 57,
        });
        assert!(format!("{:?}", Decoded(err)).starts_with('<'));
    }
}
