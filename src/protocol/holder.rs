//! Owned message storage
//!
//! `MessageHolder<M>` memiliki buffer sendiri dengan ruang SOFH di depan,
//! sehingga message bisa langsung dikirim sebagai frame tanpa copy.

use std::ops::{Deref, DerefMut};

use crate::core::{NumInGroup, Result, SchemaVersion};

use super::framing::{NetworkMessage, Sofh, SOFH_SIZE};
use super::schema::{BoeMessage, BoeMessageMut, DEFAULT_MAX_GROUP_ITEMS, SCHEMA_VERSION};

/// Heap buffer reserving the SOFH in front of the SBE message.
///
/// `AsRef`/`AsMut` expose only the SBE part, so messages wrap it directly.
pub struct FrameBuffer {
    data: Box<[u8]>,
}

impl FrameBuffer {
    /// Buffer able to hold `sbe_capacity` bytes of SBE message.
    pub fn new(sbe_capacity: usize) -> Self {
        Self {
            data: vec![0u8; SOFH_SIZE + sbe_capacity].into_boxed_slice(),
        }
    }

    /// Buffer holding a copy of `sbe`, with at least `sbe_capacity` bytes
    /// of room.
    pub fn from_sbe(sbe: &[u8], sbe_capacity: usize) -> Self {
        let mut buffer = Self::new(sbe_capacity.max(sbe.len()));
        buffer.data[SOFH_SIZE..SOFH_SIZE + sbe.len()].copy_from_slice(sbe);
        buffer
    }

    /// Writes the SOFH for `sbe_size` bytes and returns the frame.
    fn frame(&mut self, sbe_size: usize) -> Result<&[u8]> {
        Sofh::new(sbe_size)?.write_to(&mut self.data[..SOFH_SIZE]);
        Ok(&self.data[..SOFH_SIZE + sbe_size])
    }
}

impl AsRef<[u8]> for FrameBuffer {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.data[SOFH_SIZE..]
    }
}

impl AsMut<[u8]> for FrameBuffer {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data[SOFH_SIZE..]
    }
}

/// A message together with the storage it lives in.
///
/// Derefs to the message, so setters and getters are called directly:
///
/// ```ignore
/// let mut order = MessageHolder::<SimpleNewOrder100<FrameBuffer>>::new()?;
/// order.set_cl_ord_id(1).set_order_qty(100);
/// socket.write_all(order.to_network_message()?.as_bytes())?;
/// ```
pub struct MessageHolder<M> {
    message: M,
}

impl<M: BoeMessageMut<FrameBuffer>> MessageHolder<M> {
    /// Fresh message of the current schema version.
    pub fn new() -> Result<Self> {
        Self::with_version(SCHEMA_VERSION)
    }

    pub fn with_version(version: SchemaVersion) -> Result<Self> {
        Self::with_capacity(version, DEFAULT_MAX_GROUP_ITEMS)
    }

    /// Fresh message whose buffer fits `max_group_items` entries in every
    /// group and every var data at its maximum length.
    pub fn with_capacity(version: SchemaVersion, max_group_items: NumInGroup) -> Result<Self> {
        let buffer = FrameBuffer::new(M::max_binary_size(max_group_items));
        Ok(Self {
            message: M::with_version(buffer, version)?,
        })
    }

    /// Copies and validates a received frame.
    pub fn from_network_message(frame: &NetworkMessage<'_>) -> Result<Self> {
        Self::from_sbe(frame.payload())
    }

    /// Copies and validates an encoded SBE message.
    pub fn from_sbe(sbe: &[u8]) -> Result<Self> {
        let buffer = FrameBuffer::from_sbe(sbe, M::max_binary_size(DEFAULT_MAX_GROUP_ITEMS));
        Ok(Self {
            message: M::wrap(buffer)?,
        })
    }

    #[inline(always)]
    pub fn message(&self) -> &M {
        &self.message
    }

    #[inline(always)]
    pub fn message_mut(&mut self) -> &mut M {
        &mut self.message
    }

    pub fn into_message(self) -> M {
        self.message
    }

    /// Refreshes the SOFH and returns the frame ready for sending.
    pub fn to_network_message(&mut self) -> Result<NetworkMessage<'_>> {
        let size = self.message.calculate_binary_size();
        let frame = self.message.inner_mut().frame(size)?;
        NetworkMessage::new(frame)
    }
}

impl<M> Deref for MessageHolder<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.message
    }
}

impl<M> DerefMut for MessageHolder<M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut self.message
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for MessageHolder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.message, f)
    }
}
