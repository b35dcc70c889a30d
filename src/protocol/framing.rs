//! SOFH Framing: Encoder/Decoder
//!
//! Setiap message di wire didahului Simple Open Framing Header:
//! ┌──────────────────────────────────────────────┐
//! │ message_length u16 (termasuk SOFH)           │
//! │ encoding_type  u16 (0xEB50, SBE 1.0 LE)      │
//! ├──────────────────────────────────────────────┤
//! │ SBE message (header + block + tail)          │
//! └──────────────────────────────────────────────┘
//!
//! Encoder menulis ke pre-allocated buffer, decoder membaca tanpa copy.

use tracing::warn;

use crate::core::{Error, Primitive, Result, SbeMessage, HEADER_SIZE};

/// Size of the Simple Open Framing Header.
pub const SOFH_SIZE: usize = 4;

/// SOFH encoding type of little-endian SBE 1.0 messages.
pub const SBE_ENCODING_TYPE: u16 = 0xEB50;

/// Largest SBE message a frame can carry.
pub const MAX_MESSAGE_SIZE: usize = u16::MAX as usize - SOFH_SIZE;

/// Simple Open Framing Header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sofh {
    /// Frame size, SOFH included.
    pub message_length: u16,
    pub encoding_type: u16,
}

impl Sofh {
    /// Header of a frame carrying `sbe_size` bytes of SBE message.
    pub fn new(sbe_size: usize) -> Result<Self> {
        if sbe_size > MAX_MESSAGE_SIZE {
            return Err(Error::NotEnoughSpace {
                required: sbe_size,
                available: MAX_MESSAGE_SIZE,
            });
        }
        Ok(Self {
            message_length: (sbe_size + SOFH_SIZE) as u16,
            encoding_type: SBE_ENCODING_TYPE,
        })
    }

    /// Decode dan validasi SOFH dari awal buffer.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() < SOFH_SIZE {
            return Err(Error::NetPacketIsTooSmall {
                actual: buf.len(),
                required: SOFH_SIZE,
            });
        }
        let sofh = Self {
            message_length: u16::read_le(buf),
            encoding_type: u16::read_le(&buf[2..]),
        };
        if sofh.encoding_type != SBE_ENCODING_TYPE {
            return Err(Error::IncorrectEncoding {
                encoding: sofh.encoding_type,
            });
        }
        Ok(sofh)
    }

    #[inline(always)]
    pub fn write_to(&self, buf: &mut [u8]) {
        self.message_length.write_le(buf);
        self.encoding_type.write_le(&mut buf[2..]);
    }

    /// Size of the SBE message behind the header.
    #[inline(always)]
    pub fn sbe_size(&self) -> usize {
        (self.message_length as usize).saturating_sub(SOFH_SIZE)
    }
}

/// Validated view of one SOFH frame.
#[derive(Clone, Copy)]
pub struct NetworkMessage<'a> {
    frame: &'a [u8],
}

impl<'a> NetworkMessage<'a> {
    /// Wraps the frame at the start of `data`. Bytes after the frame are
    /// ignored.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let sofh = Sofh::from_bytes(data)?;
        let length = sofh.message_length as usize;
        let required = length.max(SOFH_SIZE + HEADER_SIZE);
        if data.len() < required {
            return Err(Error::NetPacketIsTooSmall {
                actual: data.len(),
                required,
            });
        }
        if length < SOFH_SIZE + HEADER_SIZE {
            return Err(Error::NetPacketIsTooSmall {
                actual: length,
                required: SOFH_SIZE + HEADER_SIZE,
            });
        }
        Ok(Self {
            frame: &data[..length],
        })
    }

    #[inline(always)]
    pub fn sofh(&self) -> Sofh {
        Sofh {
            message_length: u16::read_le(self.frame),
            encoding_type: u16::read_le(&self.frame[2..]),
        }
    }

    /// Frame bytes, SOFH included.
    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.frame
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// The SBE message bytes.
    #[inline(always)]
    pub fn payload(&self) -> &'a [u8] {
        &self.frame[SOFH_SIZE..]
    }

    /// Untyped view of the carried message.
    pub fn message(&self) -> Result<SbeMessage<&'a [u8]>> {
        SbeMessage::wrap(self.payload())
    }
}

impl std::fmt::Debug for NetworkMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkMessage")
            .field("sofh", &self.sofh())
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

/// Pre-allocated frame encoder
///
/// Semua operasi encode dilakukan ke buffer internal, tidak ada alokasi
/// dinamis setelah `new`.
pub struct FrameEncoder {
    buffer: Box<[u8]>,
    write_pos: usize,
}

impl FrameEncoder {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            write_pos: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Appends one frame carrying `sbe` and returns the frame bytes.
    pub fn encode(&mut self, sbe: &[u8]) -> Result<&[u8]> {
        let sofh = Sofh::new(sbe.len())?;
        let total = SOFH_SIZE + sbe.len();
        if total > self.available() {
            return Err(Error::NotEnoughSpace {
                required: total,
                available: self.available(),
            });
        }

        let start = self.write_pos;
        sofh.write_to(&mut self.buffer[start..]);
        self.buffer[start + SOFH_SIZE..start + total].copy_from_slice(sbe);
        self.write_pos += total;

        Ok(&self.buffer[start..self.write_pos])
    }

    /// Appends an already framed message as is.
    pub fn append(&mut self, frame: NetworkMessage<'_>) -> Result<()> {
        let bytes = frame.as_bytes();
        if bytes.len() > self.available() {
            return Err(Error::NotEnoughSpace {
                required: bytes.len(),
                available: self.available(),
            });
        }
        self.buffer[self.write_pos..self.write_pos + bytes.len()].copy_from_slice(bytes);
        self.write_pos += bytes.len();
        Ok(())
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.write_pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.write_pos == 0
    }

    /// Available space in buffer
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.write_pos
    }
}

/// Zero-copy frame decoder over a byte stream.
///
/// Iteration stops at the first malformed frame; the error is yielded once
/// and the rest of the stream is left in [`FrameDecoder::remaining`].
pub struct FrameDecoder<'a> {
    buffer: &'a [u8],
    read_pos: usize,
    failed: bool,
}

impl<'a> FrameDecoder<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
            failed: false,
        }
    }

    /// Bytes not consumed yet.
    #[inline(always)]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.read_pos..]
    }
}

impl<'a> Iterator for FrameDecoder<'a> {
    type Item = Result<NetworkMessage<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.read_pos >= self.buffer.len() {
            return None;
        }

        match NetworkMessage::new(self.remaining()) {
            Ok(frame) => {
                self.read_pos += frame.len();
                Some(Ok(frame))
            }
            Err(err) => {
                warn!(offset = self.read_pos, error = %err, "rejected frame");
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sbe_stub(template_id: u16) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        template_id.write_le(&mut buf[2..]);
        buf
    }

    #[test]
    fn test_encode_decode_frames() {
        let mut encoder = FrameEncoder::new(64);
        encoder.encode(&sbe_stub(9)).unwrap();
        encoder.encode(&sbe_stub(7)).unwrap();
        assert_eq!(encoder.len(), 2 * (SOFH_SIZE + HEADER_SIZE));

        let frames: Vec<_> = FrameDecoder::new(encoder.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].sofh().message_length, 12);
        assert_eq!(frames[1].message().unwrap().template_id(), 7);
    }

    #[test]
    fn test_incorrect_encoding() {
        let mut frame = [0u8; 12];
        Sofh::new(HEADER_SIZE).unwrap().write_to(&mut frame);
        frame[2] = 0x00;

        assert!(matches!(
            NetworkMessage::new(&frame),
            Err(Error::IncorrectEncoding { .. })
        ));
    }

    #[test]
    fn test_truncated_frame() {
        let mut encoder = FrameEncoder::new(64);
        encoder.encode(&sbe_stub(9)).unwrap();
        let bytes = encoder.as_bytes();

        let mut decoder = FrameDecoder::new(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            decoder.next(),
            Some(Err(Error::NetPacketIsTooSmall { .. }))
        ));
        assert!(decoder.next().is_none());
        assert_eq!(decoder.remaining().len(), bytes.len() - 1);
    }

    #[test]
    fn test_encoder_reuse() {
        let mut encoder = FrameEncoder::new(SOFH_SIZE + HEADER_SIZE);
        encoder.encode(&sbe_stub(1)).unwrap();
        assert!(matches!(
            encoder.encode(&sbe_stub(2)),
            Err(Error::NotEnoughSpace { .. })
        ));

        encoder.reset();
        encoder.encode(&sbe_stub(2)).unwrap();
        let frame = NetworkMessage::new(encoder.as_bytes()).unwrap();
        assert_eq!(frame.message().unwrap().template_id(), 2);
    }
}
