//! Codec errors
//!
//! Semua kegagalan codec fail-fast: tidak ada retry, tidak ada recovery.
//! Error dilaporkan saat wrap/init atau saat setter menulis ke buffer.

use thiserror::Error;

use super::header::{SchemaId, SchemaVersion, TemplateId};

/// Errors raised by the SBE codec runtime and BOE messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A group or variable-length field does not fit into the message.
    #[error("bad binary block: {reason}")]
    BadBinaryBlock { reason: &'static str },

    /// The field is not part of the message's schema version.
    #[error("field `{field}` is available since version {since}, message version is {version}")]
    DisallowedField {
        field: &'static str,
        since: SchemaVersion,
        version: SchemaVersion,
    },

    /// Buffer is shorter than the message requires.
    #[error("binary block of {class_name} is too small: {actual} bytes, {required} required")]
    BinaryBlockIsTooSmall {
        actual: usize,
        required: usize,
        class_name: &'static str,
    },

    /// Version outside `[minimal, maximal]`.
    #[error("message version {version} is not supported (supported: {minimal}..={maximal})")]
    BadMessageVersion {
        version: SchemaVersion,
        minimal: SchemaVersion,
        maximal: SchemaVersion,
    },

    #[error("bad schema id: expected {expected}, provided {provided}")]
    BadSchemaId { expected: SchemaId, provided: SchemaId },

    #[error("{class_name} expects template {expected}, got {provided}")]
    UnexpectedTemplate {
        expected: TemplateId,
        provided: TemplateId,
        class_name: &'static str,
    },

    /// A write would overflow the underlying buffer.
    #[error("not enough space: {required} bytes required, {available} available")]
    NotEnoughSpace { required: usize, available: usize },

    #[error("invalid {type_name} value: {value}")]
    InvalidEnumValue { type_name: &'static str, value: u64 },

    #[error("value of `{field}` is too long: {length} bytes, capacity {capacity}")]
    ValueTooLong {
        field: &'static str,
        length: usize,
        capacity: usize,
    },

    /// SOFH encoding type is not the BOE one.
    #[error("incorrect SOFH encoding type: {encoding:#06x}")]
    IncorrectEncoding { encoding: u16 },

    #[error("network packet is too small: {actual} bytes, {required} required")]
    NetPacketIsTooSmall { actual: usize, required: usize },

    #[error("unknown template id {template_id}")]
    UnknownTemplate { template_id: TemplateId },

    #[error("invalid UTF-8 in `{field}`")]
    BadConversion { field: &'static str },

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
