//! SBE Message Header
//!
//! Layout (little-endian):
//! ┌────────────────────────────────────────────────────┐
//! │ blockLength u16 │ templateId u16 │ schemaId u16 │ version u16 │
//! ├────────────────────────────────────────────────────┤
//! │ Root block (blockLength bytes, version dependent)  │
//! ├────────────────────────────────────────────────────┤
//! │ Groups [GroupSize + N entries] ...                 │
//! ├────────────────────────────────────────────────────┤
//! │ Var data [u8 length + bytes] ...                   │
//! └────────────────────────────────────────────────────┘
//!
//! Header dibaca langsung dari buffer tanpa copy payload.

use super::primitive::Primitive;

pub type BlockLength = u16;
pub type TemplateId = u16;
pub type SchemaId = u16;
pub type SchemaVersion = u16;
pub type NumInGroup = u8;

/// Size of the SBE message header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of the repeating group dimension header in bytes.
pub const GROUP_SIZE_ENCODING_SIZE: usize = 3;

/// Size of the var-data length prefix in bytes.
pub const VAR_DATA_LENGTH_SIZE: usize = 1;

/// Message Header - Fixed 8 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    /// Root block length of the encoded message
    pub block_length: BlockLength,
    /// Template (message type) id
    pub template_id: TemplateId,
    /// Schema id
    pub schema_id: SchemaId,
    /// Schema version the message was encoded with
    pub version: SchemaVersion,
}

impl MessageHeader {
    /// Decode header dari raw bytes
    #[inline(always)]
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        Some(Self {
            block_length: BlockLength::read_le(&buf[0..]),
            template_id: TemplateId::read_le(&buf[2..]),
            schema_id: SchemaId::read_le(&buf[4..]),
            version: SchemaVersion::read_le(&buf[6..]),
        })
    }

    /// Encode header ke buffer. `buf` harus minimal HEADER_SIZE bytes.
    #[inline(always)]
    pub fn write_to(&self, buf: &mut [u8]) {
        self.block_length.write_le(&mut buf[0..]);
        self.template_id.write_le(&mut buf[2..]);
        self.schema_id.write_le(&mut buf[4..]);
        self.version.write_le(&mut buf[6..]);
    }
}

/// Repeating group dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSize {
    pub block_length: BlockLength,
    pub num_in_group: NumInGroup,
}

impl GroupSize {
    #[inline(always)]
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < GROUP_SIZE_ENCODING_SIZE {
            return None;
        }
        Some(Self {
            block_length: BlockLength::read_le(buf),
            num_in_group: buf[2],
        })
    }

    #[inline(always)]
    pub fn write_to(&self, buf: &mut [u8]) {
        self.block_length.write_le(buf);
        buf[2] = self.num_in_group;
    }

    /// Total encoded size: dimension header plus all entries.
    #[inline(always)]
    pub fn binary_size(&self) -> usize {
        GROUP_SIZE_ENCODING_SIZE + self.block_length as usize * self.num_in_group as usize
    }
}
