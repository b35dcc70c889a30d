//! Session log lines
//!
//! Format satu baris log `.summary`:
//! `[prefix 32 karakter][base64 dari SBE message, opsional diawali SOFH]`

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::{Error, Primitive, Result, SbeMessage, HEADER_SIZE};

use super::fix::SOH;
use super::framing::{NetworkMessage, SBE_ENCODING_TYPE, SOFH_SIZE};
use super::typify::AnyMessage;

/// Length of the timestamp/direction prefix of every log line.
pub const LOG_LINE_PREFIX_SIZE: usize = 32;

/// One decoded log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub prefix: String,
    /// Whether the logged bytes started with a SOFH.
    pub sofh_detected: bool,
    data: Vec<u8>,
    sbe_start: usize,
}

impl LogRecord {
    /// The logged SBE message bytes, SOFH stripped.
    pub fn sbe_bytes(&self) -> &[u8] {
        &self.data[self.sbe_start..]
    }

    pub fn message(&self) -> Result<SbeMessage<&[u8]>> {
        SbeMessage::wrap(self.sbe_bytes())
    }

    /// Typed view of the message; unknown templates are an error here.
    pub fn typified(&self) -> Result<AnyMessage<'_>> {
        AnyMessage::decode(self.message()?)
    }

    /// `<prefix><message fields>`, the decoder's output line.
    pub fn render(&self) -> Result<String> {
        Ok(format!("{}{:?}", self.prefix, self.typified()?))
    }

    /// `<prefix><FIX tag=value fields>`, SOH shown as `|`.
    pub fn render_fix(&self) -> Result<String> {
        let mut fix = String::new();
        self.typified()?.to_fix(&mut fix);
        Ok(format!("{}{}", self.prefix, fix.replace(SOH, "|")))
    }
}

fn starts_with_sofh(data: &[u8]) -> bool {
    data.len() >= SOFH_SIZE && u16::read_le(&data[2..]) == SBE_ENCODING_TYPE
}

/// Splits a log line into prefix and message and decodes the base64 part.
pub fn decode_log_line(line: &str) -> Result<LogRecord> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let (Some(prefix), Some(encoded)) = (
        line.get(..LOG_LINE_PREFIX_SIZE),
        line.get(LOG_LINE_PREFIX_SIZE..),
    ) else {
        return Err(Error::BadBinaryBlock {
            reason: "log line is shorter than its prefix",
        });
    };

    let data = STANDARD.decode(encoded.trim())?;
    if data.is_empty() {
        return Err(Error::NetPacketIsTooSmall {
            actual: 0,
            required: HEADER_SIZE,
        });
    }

    let sofh_detected = starts_with_sofh(&data);
    let sbe_start = if sofh_detected {
        NetworkMessage::new(&data)?;
        SOFH_SIZE
    } else {
        0
    };

    Ok(LogRecord {
        prefix: prefix.to_owned(),
        sofh_detected,
        data,
        sbe_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::framing::FrameEncoder;
    use crate::protocol::messages::Sequence9;

    const PREFIX: &str = "20240105-10:15:00.123456789 OUT ";

    fn sequence_bytes(next_seq_no: u32) -> Vec<u8> {
        let mut buf = [0u8; 32];
        let mut msg = Sequence9::new(&mut buf[..]).unwrap();
        msg.set_next_seq_no(next_seq_no);
        msg.as_bytes().to_vec()
    }

    #[test]
    fn test_plain_sbe_line() {
        let line = format!("{PREFIX}{}", STANDARD.encode(sequence_bytes(5)));
        let record = decode_log_line(&line).unwrap();

        assert_eq!(record.prefix, PREFIX);
        assert!(!record.sofh_detected);
        assert_eq!(record.message().unwrap().template_id(), 9);
        assert_eq!(
            record.render().unwrap(),
            format!("{PREFIX}Sequence9 {{ next_seq_no: 5 }}")
        );
        assert_eq!(
            record.render_fix().unwrap(),
            format!("{PREFIX}35=Sequence|35529=5|")
        );
    }

    #[test]
    fn test_line_with_sofh() {
        let mut encoder = FrameEncoder::new(64);
        encoder.encode(&sequence_bytes(8)).unwrap();
        let line = format!("{PREFIX}{}\r\n", STANDARD.encode(encoder.as_bytes()));

        let record = decode_log_line(&line).unwrap();
        assert!(record.sofh_detected);
        assert_eq!(record.sbe_bytes(), sequence_bytes(8).as_slice());
    }

    #[test]
    fn test_bad_lines() {
        assert!(matches!(
            decode_log_line("short"),
            Err(Error::BadBinaryBlock { .. })
        ));
        assert!(matches!(
            decode_log_line(&format!("{PREFIX}@@@")),
            Err(Error::Base64(_))
        ));
        assert!(matches!(
            decode_log_line(PREFIX),
            Err(Error::NetPacketIsTooSmall { .. })
        ));
    }
}
