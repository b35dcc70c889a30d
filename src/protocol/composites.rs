//! BOE composite types and var-data encodings
//!
//! Composite di-decode by value (ukurannya kecil dan fixed), field optional
//! direpresentasikan sebagai `Option`.

use crate::core::{Composite, NullableComposite, Primitive, UtcTimestampNanos};

use super::fields::EventIndicator;

fn read_timestamp(buf: &[u8]) -> Option<UtcTimestampNanos> {
    let value = UtcTimestampNanos::read_le(buf);
    (value != UtcTimestampNanos::NULL).then_some(value)
}

fn read_non_zero<T: Primitive + PartialEq + Default>(buf: &[u8]) -> Option<T> {
    let value = T::read_le(buf);
    (value != T::default()).then_some(value)
}

/// Header of messages sent by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InboundBusinessHeader {
    pub session_id: u32,
    pub msg_seq_num: u32,
    /// Set by the gateway; clients usually leave it null.
    pub sending_time: Option<UtcTimestampNanos>,
    pub market_segment_id: u8,
}

impl Composite for InboundBusinessHeader {
    const SIZE: usize = 18;

    fn decode(buf: &[u8]) -> Self {
        Self {
            session_id: u32::read_le(buf),
            msg_seq_num: u32::read_le(&buf[4..]),
            sending_time: read_timestamp(&buf[8..]),
            market_segment_id: u8::read_le(&buf[16..]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        self.session_id.write_le(buf);
        self.msg_seq_num.write_le(&mut buf[4..]);
        self.sending_time
            .unwrap_or(UtcTimestampNanos::NULL)
            .write_le(&mut buf[8..]);
        self.market_segment_id.write_le(&mut buf[16..]);
        buf[17] = 0;
    }
}

/// Header of messages sent by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutboundBusinessHeader {
    pub session_id: u32,
    pub msg_seq_num: u32,
    pub sending_time: Option<UtcTimestampNanos>,
    pub event_indicator: EventIndicator,
    pub market_segment_id: Option<u8>,
}

impl Composite for OutboundBusinessHeader {
    const SIZE: usize = 18;

    fn decode(buf: &[u8]) -> Self {
        Self {
            session_id: u32::read_le(buf),
            msg_seq_num: u32::read_le(&buf[4..]),
            sending_time: read_timestamp(&buf[8..]),
            event_indicator: EventIndicator::from_bits(buf[16]),
            market_segment_id: read_non_zero(&buf[17..]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        self.session_id.write_le(buf);
        self.msg_seq_num.write_le(&mut buf[4..]);
        self.sending_time
            .unwrap_or(UtcTimestampNanos::NULL)
            .write_le(&mut buf[8..]);
        buf[16] = self.event_indicator.bits();
        buf[17] = self.market_segment_id.unwrap_or(0);
    }
}

/// Header of the quote messages, sent by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BidirectionalBusinessHeader {
    pub session_id: u32,
    pub msg_seq_num: u32,
    pub sending_time: Option<UtcTimestampNanos>,
    pub event_indicator: EventIndicator,
    pub market_segment_id: Option<u8>,
}

impl Composite for BidirectionalBusinessHeader {
    const SIZE: usize = 20;

    fn decode(buf: &[u8]) -> Self {
        let OutboundBusinessHeader {
            session_id,
            msg_seq_num,
            sending_time,
            event_indicator,
            market_segment_id,
        } = OutboundBusinessHeader::decode(buf);
        Self {
            session_id,
            msg_seq_num,
            sending_time,
            event_indicator,
            market_segment_id,
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        OutboundBusinessHeader {
            session_id: self.session_id,
            msg_seq_num: self.msg_seq_num,
            sending_time: self.sending_time,
            event_indicator: self.event_indicator,
            market_segment_id: self.market_segment_id,
        }
        .encode(buf);
        buf[18..20].fill(0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustodianInfo {
    pub custodian: u32,
    pub custody_account: Option<u32>,
    pub custody_allocation_type: Option<u32>,
}

impl Composite for CustodianInfo {
    const SIZE: usize = 12;

    fn decode(buf: &[u8]) -> Self {
        Self {
            custodian: u32::read_le(buf),
            custody_account: read_non_zero(&buf[4..]),
            custody_allocation_type: read_non_zero(&buf[8..]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        self.custodian.write_le(buf);
        self.custody_account.unwrap_or(0).write_le(&mut buf[4..]);
        self.custody_allocation_type
            .unwrap_or(0)
            .write_le(&mut buf[8..]);
    }
}

impl NullableComposite for CustodianInfo {
    const NULL: Self = Self {
        custodian: 0,
        custody_account: None,
        custody_allocation_type: None,
    };

    fn is_null(&self) -> bool {
        self.custodian == 0
    }
}

/// Investor document: prefix plus document number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvestorId {
    pub prefix: u16,
    pub document: Option<u32>,
}

impl Composite for InvestorId {
    const SIZE: usize = 8;

    fn decode(buf: &[u8]) -> Self {
        Self {
            prefix: u16::read_le(buf),
            document: read_non_zero(&buf[4..]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        self.prefix.write_le(buf);
        buf[2..4].fill(0);
        self.document.unwrap_or(0).write_le(&mut buf[4..]);
    }
}

impl NullableComposite for InvestorId {
    const NULL: Self = Self {
        prefix: 0,
        document: None,
    };

    fn is_null(&self) -> bool {
        self.prefix == 0
    }
}

/// Identifies matches produced by one implied event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImpliedEventId {
    pub event_id: Option<u32>,
    pub no_related_trades: Option<u16>,
}

impl Composite for ImpliedEventId {
    const SIZE: usize = 6;

    fn decode(buf: &[u8]) -> Self {
        Self {
            event_id: read_non_zero(buf),
            no_related_trades: read_non_zero(&buf[4..]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        self.event_id.unwrap_or(0).write_le(buf);
        self.no_related_trades.unwrap_or(0).write_le(&mut buf[4..]);
    }
}

impl NullableComposite for ImpliedEventId {
    const NULL: Self = Self {
        event_id: None,
        no_related_trades: None,
    };

    fn is_null(&self) -> bool {
        self.event_id.is_none()
    }
}

/// Protocol version announced by the gateway, `major.minor.patch.build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub minor: Option<u8>,
    pub patch: Option<u8>,
    pub build: Option<u8>,
}

const NULL_VERSION_PART: u8 = u8::MAX;

fn read_version_part(value: u8) -> Option<u8> {
    (value != NULL_VERSION_PART).then_some(value)
}

impl Composite for Version {
    const SIZE: usize = 4;

    fn decode(buf: &[u8]) -> Self {
        Self {
            major: buf[0],
            minor: read_version_part(buf[1]),
            patch: read_version_part(buf[2]),
            build: read_version_part(buf[3]),
        }
    }

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = self.major;
        buf[1] = self.minor.unwrap_or(NULL_VERSION_PART);
        buf[2] = self.patch.unwrap_or(NULL_VERSION_PART);
        buf[3] = self.build.unwrap_or(NULL_VERSION_PART);
    }
}

impl NullableComposite for Version {
    const NULL: Self = Self {
        major: NULL_VERSION_PART,
        minor: None,
        patch: None,
        build: None,
    };

    fn is_null(&self) -> bool {
        self.major == NULL_VERSION_PART
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.major)?;
        for part in [self.minor, self.patch, self.build].into_iter().flatten() {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

/// Credentials (JSON with the access key), at most 128 bytes.
pub struct CredentialsEncoding;

impl CredentialsEncoding {
    pub const MAX_LENGTH: usize = 128;
}

/// Free text memo, at most 40 bytes.
pub struct MemoEncoding;

impl MemoEncoding {
    pub const MAX_LENGTH: usize = 40;
}

pub struct TextEncoding;

impl TextEncoding {
    pub const MAX_LENGTH: usize = 250;
}

pub struct DeskIdEncoding;

impl DeskIdEncoding {
    pub const MAX_LENGTH: usize = 20;
}

/// Client application name, version or IP, at most 30 bytes.
pub struct ClientAppEncoding;

impl ClientAppEncoding {
    pub const MAX_LENGTH: usize = 30;
}
