//! Core module: SBE codec runtime
//!
//! Prinsip desain:
//! - Zero-Copy: Message adalah view di atas buffer milik caller
//! - No-Allocation: Encode/decode langsung ke/dari buffer
//! - Fail-Fast: Validasi saat wrap/init, accessor setelahnya tanpa parsing

mod decimal;
mod error;
mod fields;
mod group;
mod header;
mod journal;
mod message;
mod primitive;
mod time;

pub use decimal::{FixedPoint, Percentage8, Price, Price8, PriceOffset, RatioQty};
pub use error::{Error, Result};
pub use fields::{Composite, NullableComposite, SbeEnum, SbeFields, SbeFieldsMut};
pub use group::{Group, GroupIter, GroupIterMut, GroupMut, SbeEntry};
pub use header::{
    BlockLength, GroupSize, MessageHeader, NumInGroup, SchemaId, SchemaVersion, TemplateId,
    GROUP_SIZE_ENCODING_SIZE, HEADER_SIZE, VAR_DATA_LENGTH_SIZE,
};
pub use journal::{FrameJournal, Records};
pub use message::{max_tail_size, minimal_tail_size, SbeMessage, TailKind};
pub use primitive::{
    Primitive, StrRef, NULL_CHAR, NULL_INT16, NULL_INT32, NULL_INT64, NULL_INT8, NULL_UINT16,
    NULL_UINT32, NULL_UINT64, NULL_UINT8,
};
pub use time::{DeltaInMillis, LocalMktDate, UtcTimestampNanos};
