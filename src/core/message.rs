//! Untyped SBE message view
//!
//! `SbeMessage<B>` adalah flyweight di atas buffer milik caller:
//! - `B: AsRef<[u8]>` untuk baca (zero-copy wrap)
//! - `B: AsMut<[u8]>` untuk tulis (init, setter, re-layout tail)
//!
//! Tail (groups lalu var data) di-chain: offset elemen ke-N dihitung
//! dengan melompati elemen 0..N.
//!
//! Method yang berjalan di atas tail hanya `pub(crate)`: mereka mengindeks
//! buffer langsung dan mengasumsikan `check_tail` sudah lolos, yang dijamin
//! oleh `wrap`/`init` dari message typed.

use tracing::debug;

use super::error::{Error, Result};
use super::fields::{SbeFields, SbeFieldsMut};
use super::group::{Group, GroupMut, SbeEntry};
use super::header::{
    BlockLength, GroupSize, MessageHeader, NumInGroup, SchemaId, SchemaVersion, TemplateId,
    GROUP_SIZE_ENCODING_SIZE, HEADER_SIZE, VAR_DATA_LENGTH_SIZE,
};
use super::primitive::{Primitive, StrRef};

/// Element of a message tail, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailKind {
    /// Repeating group whose entries are `entry_length` bytes long.
    Group { entry_length: BlockLength },
    /// Length-prefixed variable data of at most `max_length` bytes.
    VarData { max_length: usize },
}

/// Size of a tail with all groups empty and all var data null.
pub const fn minimal_tail_size(tail: &[TailKind]) -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < tail.len() {
        size += match tail[i] {
            TailKind::Group { .. } => GROUP_SIZE_ENCODING_SIZE,
            TailKind::VarData { .. } => VAR_DATA_LENGTH_SIZE,
        };
        i += 1;
    }
    size
}

/// Largest tail: every group holds `max_group_items` entries and every var
/// data field is at its maximum length.
pub const fn max_tail_size(tail: &[TailKind], max_group_items: NumInGroup) -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < tail.len() {
        size += match tail[i] {
            TailKind::Group { entry_length } => {
                GROUP_SIZE_ENCODING_SIZE + entry_length as usize * max_group_items as usize
            }
            TailKind::VarData { max_length } => VAR_DATA_LENGTH_SIZE + max_length,
        };
        i += 1;
    }
    size
}

/// Flyweight over an SBE-encoded message (header at offset 0).
#[derive(Clone, Copy)]
pub struct SbeMessage<B> {
    buf: B,
}

impl<B: AsRef<[u8]>> SbeMessage<B> {
    /// Wrap buffer yang sudah berisi message.
    ///
    /// Checks that the header and the root block fit into the buffer.
    pub fn wrap(buf: B) -> Result<Self> {
        let data = buf.as_ref();
        let header = MessageHeader::from_bytes(data).ok_or(Error::BinaryBlockIsTooSmall {
            actual: data.len(),
            required: HEADER_SIZE,
            class_name: "SbeMessage",
        })?;
        let required = HEADER_SIZE + header.block_length as usize;
        if data.len() < required {
            return Err(Error::BinaryBlockIsTooSmall {
                actual: data.len(),
                required,
                class_name: "SbeMessage",
            });
        }
        Ok(Self { buf })
    }

    /// Buffer penuh (termasuk kapasitas yang belum terpakai)
    #[inline(always)]
    pub fn buffer(&self) -> &[u8] {
        self.buf.as_ref()
    }

    #[inline(always)]
    pub fn buffer_size(&self) -> usize {
        self.buf.as_ref().len()
    }

    #[inline(always)]
    pub fn inner(&self) -> &B {
        &self.buf
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    #[inline(always)]
    pub fn header(&self) -> MessageHeader {
        MessageHeader {
            block_length: self.block_length(),
            template_id: self.template_id(),
            schema_id: self.schema_id(),
            version: self.version(),
        }
    }

    #[inline(always)]
    pub fn block_length(&self) -> BlockLength {
        BlockLength::read_le(self.buffer())
    }

    #[inline(always)]
    pub fn template_id(&self) -> TemplateId {
        TemplateId::read_le(&self.buffer()[2..])
    }

    #[inline(always)]
    pub fn schema_id(&self) -> SchemaId {
        SchemaId::read_le(&self.buffer()[4..])
    }

    #[inline(always)]
    pub fn version(&self) -> SchemaVersion {
        SchemaVersion::read_le(&self.buffer()[6..])
    }

    /// Validates schema id and version against the supported range.
    pub fn check_schema(
        &self,
        schema_id: SchemaId,
        minimal: SchemaVersion,
        maximal: SchemaVersion,
    ) -> Result<()> {
        let provided = self.schema_id();
        if provided != schema_id {
            return Err(Error::BadSchemaId {
                expected: schema_id,
                provided,
            });
        }
        let version = self.version();
        if version < minimal {
            return Err(Error::BadMessageVersion {
                version,
                minimal,
                maximal,
            });
        }
        Ok(())
    }

    pub fn check_template(&self, expected: TemplateId, class_name: &'static str) -> Result<()> {
        let provided = self.template_id();
        if provided != expected {
            return Err(Error::UnexpectedTemplate {
                expected,
                provided,
                class_name,
            });
        }
        Ok(())
    }

    /// Buffer must hold at least `minimal_block_length + header + minimal
    /// tail`, and the encoded block must not be shorter than the minimal one.
    pub fn check_length(
        &self,
        minimal_block_length: BlockLength,
        tail: &[TailKind],
        class_name: &'static str,
    ) -> Result<()> {
        let required = HEADER_SIZE + minimal_block_length as usize + minimal_tail_size(tail);
        let actual = self.buffer_size();
        if actual < required || self.block_length() < minimal_block_length {
            return Err(Error::BinaryBlockIsTooSmall {
                actual,
                required,
                class_name,
            });
        }
        Ok(())
    }

    /// Validates every tail element against the buffer.
    pub fn check_tail(&self, tail: &[TailKind]) -> Result<()> {
        let data = self.buffer();
        let mut offset = self.tail_start();
        for kind in tail {
            let rest = data.get(offset..).unwrap_or(&[]);
            offset += match *kind {
                TailKind::Group { entry_length } => {
                    let size = GroupSize::from_bytes(rest).ok_or(Error::BadBinaryBlock {
                        reason: "group dimension exceeds the message",
                    })?;
                    if size.num_in_group > 0 && size.block_length < entry_length {
                        return Err(Error::BadBinaryBlock {
                            reason: "group entry is shorter than its minimal block",
                        });
                    }
                    if size.binary_size() > rest.len() {
                        return Err(Error::BadBinaryBlock {
                            reason: "group entries exceed the message",
                        });
                    }
                    size.binary_size()
                }
                TailKind::VarData { .. } => {
                    let length = *rest.first().ok_or(Error::BadBinaryBlock {
                        reason: "var data length exceeds the message",
                    })? as usize;
                    if VAR_DATA_LENGTH_SIZE + length > rest.len() {
                        return Err(Error::BadBinaryBlock {
                            reason: "var data exceeds the message",
                        });
                    }
                    VAR_DATA_LENGTH_SIZE + length
                }
            };
        }
        Ok(())
    }

    /// Offset of the first group/var-data element.
    #[inline(always)]
    pub fn tail_start(&self) -> usize {
        HEADER_SIZE + self.block_length() as usize
    }

    /// Offset of tail element `index`.
    ///
    /// # Panics
    ///
    /// When the tail was not validated with [`Self::check_tail`].
    pub(crate) fn tail_offset(&self, tail: &[TailKind], index: usize) -> usize {
        let data = self.buffer();
        let mut offset = self.tail_start();
        for kind in &tail[..index] {
            offset += match kind {
                TailKind::Group { .. } => GroupSize::from_bytes(&data[offset..])
                    .map(|size| size.binary_size())
                    .unwrap_or(GROUP_SIZE_ENCODING_SIZE),
                TailKind::VarData { .. } => VAR_DATA_LENGTH_SIZE + data[offset] as usize,
            };
        }
        offset
    }

    /// Encoded size of the message: header, block and whole tail.
    #[inline(always)]
    pub(crate) fn calculate_binary_size(&self, tail: &[TailKind]) -> usize {
        self.tail_offset(tail, tail.len())
    }

    /// The encoded bytes of the message.
    pub(crate) fn as_bytes(&self, tail: &[TailKind]) -> &[u8] {
        &self.buffer()[..self.calculate_binary_size(tail)]
    }

    /// Group starting at `offset`.
    pub(crate) fn group<'a, E: SbeEntry<&'a [u8]>>(&'a self, offset: usize) -> Group<'a, E> {
        Group::new(&self.buffer()[offset..], self.version())
    }

    /// Var data starting at `offset`.
    pub(crate) fn var_data(&self, offset: usize) -> StrRef<'_> {
        let data = self.buffer();
        let length = data[offset] as usize;
        let start = offset + VAR_DATA_LENGTH_SIZE;
        StrRef::new(&data[start..start + length])
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> SbeMessage<B> {
    /// Initialize message baru di atas buffer.
    ///
    /// Writes the header, zeroes the root block and lays out an empty tail.
    pub fn init(
        mut buf: B,
        template_id: TemplateId,
        block_length: BlockLength,
        schema_id: SchemaId,
        version: SchemaVersion,
        tail: &[TailKind],
        class_name: &'static str,
    ) -> Result<Self> {
        let data = buf.as_mut();
        let required = HEADER_SIZE + block_length as usize + minimal_tail_size(tail);
        if data.len() < required {
            return Err(Error::BinaryBlockIsTooSmall {
                actual: data.len(),
                required,
                class_name,
            });
        }

        MessageHeader {
            block_length,
            template_id,
            schema_id,
            version,
        }
        .write_to(data);
        data[HEADER_SIZE..HEADER_SIZE + block_length as usize].fill(0);

        let mut msg = Self { buf };
        msg.reset_tail(tail);
        debug!(class_name, template_id, version, "message initialized");
        Ok(msg)
    }

    #[inline(always)]
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.buf
    }

    #[inline(always)]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    /// Empties every group and nulls every var data field, in place.
    pub(crate) fn reset_tail(&mut self, tail: &[TailKind]) {
        let mut offset = self.tail_start();
        let data = self.buf.as_mut();
        for kind in tail {
            match *kind {
                TailKind::Group { entry_length } => {
                    GroupSize {
                        block_length: entry_length,
                        num_in_group: 0,
                    }
                    .write_to(&mut data[offset..]);
                    offset += GROUP_SIZE_ENCODING_SIZE;
                }
                TailKind::VarData { .. } => {
                    data[offset] = 0;
                    offset += VAR_DATA_LENGTH_SIZE;
                }
            }
        }
    }

    /// Resizes group `index` to `count` entries, moving the rest of the tail.
    ///
    /// Existing entries are kept, new entries are zeroed. Returns the
    /// previous entry count.
    pub(crate) fn setup_group(
        &mut self,
        tail: &[TailKind],
        index: usize,
        count: NumInGroup,
    ) -> Result<NumInGroup> {
        let TailKind::Group { entry_length } = tail[index] else {
            return Err(Error::BadBinaryBlock {
                reason: "tail element is not a group",
            });
        };
        let offset = self.tail_offset(tail, index);
        let end = self.calculate_binary_size(tail);
        let data = self.buf.as_mut();

        let mut size = GroupSize::from_bytes(&data[offset..]).ok_or(Error::BadBinaryBlock {
            reason: "group dimension exceeds the message",
        })?;
        if size.block_length < entry_length {
            return Err(Error::BadBinaryBlock {
                reason: "group entry is shorter than its block",
            });
        }
        let old_count = size.num_in_group;
        if old_count == count {
            return Ok(old_count);
        }

        let entry_size = size.block_length as usize;
        let entries = offset + GROUP_SIZE_ENCODING_SIZE;
        let old_end = entries + entry_size * old_count as usize;
        let new_end = entries + entry_size * count as usize;
        let required = end - old_end + new_end;
        if required > data.len() {
            return Err(Error::NotEnoughSpace {
                required,
                available: data.len(),
            });
        }

        data.copy_within(old_end..end, new_end);
        if new_end > old_end {
            data[old_end..new_end].fill(0);
        }
        size.num_in_group = count;
        size.write_to(&mut data[offset..]);
        debug!(old_count, count, entry_size, "group resized");
        Ok(old_count)
    }

    /// Mutable view of the group starting at `offset`.
    pub(crate) fn group_mut<'a, E: SbeEntry<&'a mut [u8]>>(&'a mut self, offset: usize) -> GroupMut<'a, E> {
        let version = self.version();
        GroupMut::new(&mut self.buf.as_mut()[offset..], version)
    }

    /// Replaces var data element `index`, moving the rest of the tail.
    pub(crate) fn set_var_data(
        &mut self,
        tail: &[TailKind],
        index: usize,
        field: &'static str,
        value: &[u8],
    ) -> Result<()> {
        let TailKind::VarData { max_length } = tail[index] else {
            return Err(Error::BadBinaryBlock {
                reason: "tail element is not var data",
            });
        };
        if value.len() > max_length {
            return Err(Error::ValueTooLong {
                field,
                length: value.len(),
                capacity: max_length,
            });
        }
        let offset = self.tail_offset(tail, index);
        let end = self.calculate_binary_size(tail);
        let data = self.buf.as_mut();

        let old_data_end = offset + VAR_DATA_LENGTH_SIZE + data[offset] as usize;
        let new_data_end = offset + VAR_DATA_LENGTH_SIZE + value.len();
        let required = end - old_data_end + new_data_end;
        if required > data.len() {
            return Err(Error::NotEnoughSpace {
                required,
                available: data.len(),
            });
        }

        data.copy_within(old_data_end..end, new_data_end);
        data[offset] = value.len() as u8;
        data[offset + VAR_DATA_LENGTH_SIZE..new_data_end].copy_from_slice(value);
        Ok(())
    }
}

impl<B: AsRef<[u8]>> SbeFields for SbeMessage<B> {
    #[inline(always)]
    fn block(&self) -> &[u8] {
        &self.buffer()[HEADER_SIZE..]
    }

    #[inline(always)]
    fn version(&self) -> SchemaVersion {
        SbeMessage::version(self)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> SbeFieldsMut for SbeMessage<B> {
    #[inline(always)]
    fn block_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[HEADER_SIZE..]
    }
}
