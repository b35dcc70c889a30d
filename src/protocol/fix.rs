//! FIX tag=value rendering
//!
//! Setiap message, group entry, enum dan composite bisa ditulis sebagai
//! field FIX (`tag=value<SOH>`). Field null dan string kosong dilewati.
//! Enum ditulis sebagai nilai wire-nya: char untuk enum berbasis char,
//! angka untuk sisanya.

use std::fmt::Write as _;

use crate::core::{
    DeltaInMillis, FixedPoint, LocalMktDate, SbeEnum, StrRef, UtcTimestampNanos,
};

use super::composites::{
    BidirectionalBusinessHeader, CustodianInfo, ImpliedEventId, InboundBusinessHeader,
    InvestorId, OutboundBusinessHeader, Version,
};
use super::fields::EventIndicator;

/// FIX field delimiter.
pub const SOH: char = '\u{1}';

pub const TAG_MSG_TYPE: u32 = 35;

/// A value with a FIX text representation.
pub trait FixValue {
    fn write_fix(&self, out: &mut String);
}

macro_rules! impl_fix_value_display {
    ($($ty:ty),+) => {
        $(
            impl FixValue for $ty {
                #[inline]
                fn write_fix(&self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )+
    };
}

impl_fix_value_display!(u8, u16, u32, u64, i8, i16, i32, i64, UtcTimestampNanos, LocalMktDate);

impl<const EXPONENT: i8> FixValue for FixedPoint<EXPONENT> {
    fn write_fix(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

impl FixValue for DeltaInMillis {
    fn write_fix(&self, out: &mut String) {
        self.millis().write_fix(out);
    }
}

impl FixValue for StrRef<'_> {
    fn write_fix(&self, out: &mut String) {
        out.push_str(&String::from_utf8_lossy(self.as_bytes()));
    }
}

impl FixValue for str {
    fn write_fix(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl FixValue for EventIndicator {
    fn write_fix(&self, out: &mut String) {
        self.bits().write_fix(out);
    }
}

/// Writes the wire value of an enumeration.
pub fn write_enum_base<E: SbeEnum>(raw: E::Base, out: &mut String) {
    let raw: u64 = raw.into();
    match u8::try_from(raw) {
        Ok(byte) if E::CHAR_BASED => out.push(byte as char),
        _ => raw.write_fix(out),
    }
}

/// Appends `tag=value<SOH>` fields to a string.
pub struct FixWriter<'a> {
    out: &'a mut String,
}

impl<'a> FixWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }

    pub fn field<V: FixValue + ?Sized>(&mut self, tag: u32, value: &V) -> &mut Self {
        let _ = write!(self.out, "{tag}=");
        value.write_fix(self.out);
        self.out.push(SOH);
        self
    }

    /// Skips `None`.
    pub fn optional<V: FixValue>(&mut self, tag: u32, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.field(tag, &value);
        }
        self
    }

    /// Skips empty strings, the null value of text fields.
    pub fn text(&mut self, tag: u32, value: StrRef<'_>) -> &mut Self {
        if !value.is_empty() {
            self.field(tag, &value);
        }
        self
    }

    pub fn enumeration<E: SbeEnum>(&mut self, tag: u32, raw: E::Base) -> &mut Self {
        let _ = write!(self.out, "{tag}=");
        write_enum_base::<E>(raw, self.out);
        self.out.push(SOH);
        self
    }
}

/// Composite rendered as several FIX fields.
pub trait FixComposite {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>);
}

impl FixComposite for InboundBusinessHeader {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.field(35524, &self.session_id)
            .field(34, &self.msg_seq_num)
            .optional(52, self.sending_time)
            .field(1300, &self.market_segment_id);
    }
}

impl FixComposite for OutboundBusinessHeader {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.field(35524, &self.session_id)
            .field(34, &self.msg_seq_num)
            .optional(52, self.sending_time)
            .field(97, &u8::from(self.event_indicator.poss_resend()))
            .optional(1300, self.market_segment_id);
    }
}

impl FixComposite for BidirectionalBusinessHeader {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.field(35524, &self.session_id)
            .field(34, &self.msg_seq_num)
            .optional(52, self.sending_time)
            .field(97, &u8::from(self.event_indicator.poss_resend()))
            .optional(1300, self.market_segment_id);
    }
}

impl FixComposite for CustodianInfo {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.field(35530, &self.custodian)
            .optional(35531, self.custody_account)
            .optional(35532, self.custody_allocation_type);
    }
}

impl FixComposite for InvestorId {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.field(35540, &self.prefix).optional(35541, self.document);
    }
}

impl FixComposite for ImpliedEventId {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        w.optional(35542, self.event_id)
            .optional(35543, self.no_related_trades);
    }
}

impl FixComposite for Version {
    fn write_fix_fields(&self, w: &mut FixWriter<'_>) {
        let _ = write!(w.out, "35520={self}");
        w.out.push(SOH);
    }
}

/// FIX `MsgType` (tag 35) of an application message. FIXP session
/// messages have no FIX type and keep their name.
pub fn fix_msg_type(fix_type: &'static str) -> &'static str {
    match fix_type {
        "ExecutionReport" => "8",
        "NewOrderSingle" => "D",
        "OrderCancelRequest" => "F",
        "OrderCancelReplaceRequest" => "G",
        "AllocationInstruction" => "J",
        "QuoteRequest" => "R",
        "Quote" => "S",
        "QuoteCancel" => "Z",
        "SecurityDefinitionRequest" => "c",
        "SecurityDefinition" => "d",
        "BusinessMessageReject" => "j",
        "NewOrderCross" => "s",
        "QuoteRequestReject" => "AG",
        "QuoteStatusReport" => "AI",
        "PositionMaintenanceRequest" => "AL",
        "PositionMaintenanceReport" => "AM",
        "AllocationReport" => "AS",
        "OrderMassActionReport" => "BZ",
        "OrderMassActionRequest" => "CA",
        other => other,
    }
}

/// Looks up `tag` in a rendered FIX string.
pub fn fix_field(fix: &str, tag: u32) -> Option<&str> {
    fix.split(SOH).find_map(|field| {
        let (key, value) = field.split_once('=')?;
        (key.parse::<u32>().ok()? == tag).then_some(value)
    })
}
