//! Message batches
//!
//! Beberapa frame dikirim dalam satu packet. `MessageBatch` menyimpan
//! holder dengan tipe yang sama, `MessageBatchCombiner` meminjam frame
//! dari holder/batch dengan tipe berbeda.

use crate::core::Result;

use super::framing::{FrameEncoder, NetworkMessage, SOFH_SIZE};
use super::holder::{FrameBuffer, MessageHolder};
use super::schema::{BoeMessage, BoeMessageMut};

/// Packet size the batch checks assume (Ethernet MTU minus IP/TCP headers).
pub const DEFAULT_MAX_PACKET_SIZE: usize = 1460;

/// Total size of the given frames.
pub fn calculate_batch_size<'a, 'b: 'a>(
    frames: impl IntoIterator<Item = &'a NetworkMessage<'b>>,
) -> usize {
    frames.into_iter().map(NetworkMessage::len).sum()
}

/// Ordered messages of one type.
pub struct MessageBatch<M> {
    holders: Vec<MessageHolder<M>>,
}

impl<M: BoeMessageMut<FrameBuffer>> MessageBatch<M> {
    pub fn new() -> Self {
        Self {
            holders: Vec::new(),
        }
    }

    /// Batch of `size` freshly initialized messages.
    pub fn with_size(size: usize) -> Result<Self> {
        let holders = (0..size)
            .map(|_| MessageHolder::new())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { holders })
    }

    pub fn add(&mut self, holder: MessageHolder<M>) -> &mut Self {
        self.holders.push(holder);
        self
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MessageHolder<M>> {
        self.holders.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MessageHolder<M>> {
        self.holders.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageHolder<M>> {
        self.holders.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MessageHolder<M>> {
        self.holders.iter_mut()
    }

    /// Refreshes every SOFH and returns the frames, in order.
    pub fn update_headers(&mut self) -> Result<Vec<NetworkMessage<'_>>> {
        self.holders
            .iter_mut()
            .map(MessageHolder::to_network_message)
            .collect()
    }

    /// Size of the batch on the wire.
    pub fn calculate_batch_size(&self) -> usize {
        self.holders
            .iter()
            .map(|holder| SOFH_SIZE + holder.message().calculate_binary_size())
            .sum()
    }

    /// True when the whole batch fits one packet of `max_packet_size`.
    pub fn fits(&self, max_packet_size: usize) -> bool {
        self.calculate_batch_size() <= max_packet_size
    }

    /// Appends all frames to `encoder`.
    pub fn encode_into(&mut self, encoder: &mut FrameEncoder) -> Result<()> {
        for frame in self.update_headers()? {
            encoder.append(frame)?;
        }
        Ok(())
    }
}

impl<M: BoeMessageMut<FrameBuffer>> Default for MessageBatch<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames of messages of different types, borrowed from their holders.
///
/// Holders stay borrowed for the combiner's lifetime, so they cannot be
/// changed after being added.
#[derive(Default)]
pub struct MessageBatchCombiner<'a> {
    frames: Vec<NetworkMessage<'a>>,
}

impl<'a> MessageBatchCombiner<'a> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Adds one message, refreshing its SOFH.
    pub fn add<M: BoeMessageMut<FrameBuffer>>(
        &mut self,
        holder: &'a mut MessageHolder<M>,
    ) -> Result<&mut Self> {
        self.frames.push(holder.to_network_message()?);
        Ok(self)
    }

    /// Adds every message of `batch`, refreshing their SOFHs.
    pub fn add_batch<M: BoeMessageMut<FrameBuffer>>(
        &mut self,
        batch: &'a mut MessageBatch<M>,
    ) -> Result<&mut Self> {
        self.frames.extend(batch.update_headers()?);
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[NetworkMessage<'a>] {
        &self.frames
    }

    pub fn calculate_batch_size(&self) -> usize {
        calculate_batch_size(&self.frames)
    }

    pub fn fits(&self, max_packet_size: usize) -> bool {
        self.calculate_batch_size() <= max_packet_size
    }

    /// Concatenated frames, ready to be written in one call.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.calculate_batch_size());
        for frame in &self.frames {
            bytes.extend_from_slice(frame.as_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HEADER_SIZE;
    use crate::protocol::framing::FrameDecoder;
    use crate::protocol::messages::{OrderCancelRequest105, Sequence9, SimpleNewOrder100};

    #[test]
    fn test_batch_frames() {
        let mut batch = MessageBatch::<Sequence9<FrameBuffer>>::with_size(3).unwrap();
        for (i, holder) in batch.iter_mut().enumerate() {
            holder.set_next_seq_no(i as u32 + 1);
        }

        let frame_size = SOFH_SIZE + HEADER_SIZE + 4;
        assert_eq!(batch.calculate_batch_size(), 3 * frame_size);
        assert!(batch.fits(DEFAULT_MAX_PACKET_SIZE));
        assert!(!batch.fits(2 * frame_size));

        let mut encoder = FrameEncoder::new(256);
        batch.encode_into(&mut encoder).unwrap();
        let seq: Vec<u32> = FrameDecoder::new(encoder.as_bytes())
            .map(|frame| {
                let frame = frame.unwrap();
                Sequence9::wrap(frame.payload()).unwrap().next_seq_no()
            })
            .collect();
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_combiner_mixes_types() {
        let mut order = MessageHolder::<SimpleNewOrder100<FrameBuffer>>::new().unwrap();
        order.set_cl_ord_id(1);
        let mut cancel = MessageHolder::<OrderCancelRequest105<FrameBuffer>>::new().unwrap();
        cancel.set_cl_ord_id(2);
        let mut heartbeats = MessageBatch::<Sequence9<FrameBuffer>>::with_size(2).unwrap();

        let mut combiner = MessageBatchCombiner::new();
        combiner.add(&mut order).unwrap();
        combiner.add(&mut cancel).unwrap();
        combiner.add_batch(&mut heartbeats).unwrap();

        assert_eq!(combiner.len(), 4);
        let templates: Vec<u16> = combiner
            .frames()
            .iter()
            .map(|frame| frame.message().unwrap().template_id())
            .collect();
        assert_eq!(templates, vec![100, 105, 9, 9]);

        let bytes = combiner.to_bytes();
        assert_eq!(bytes.len(), combiner.calculate_batch_size());
        assert!(combiner.fits(DEFAULT_MAX_PACKET_SIZE));
    }
}
