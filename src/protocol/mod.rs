//! Protocol Layer: B3 Binary Order Entry
//!
//! Prinsip desain:
//! - Flyweight: setiap message adalah view bertipe di atas buffer
//! - Fixed offsets: field dibaca langsung tanpa parsing
//! - Framing terpisah: SOFH + SBE, siap dikirim atau di-journal

#[macro_use]
mod macros;

mod batch;
mod composites;
mod fields;
pub mod fix;
mod framing;
mod holder;
pub mod log;
pub mod messages;
mod schema;
mod typify;

pub use batch::{calculate_batch_size, MessageBatch, MessageBatchCombiner, DEFAULT_MAX_PACKET_SIZE};
pub use composites::{
    BidirectionalBusinessHeader, ClientAppEncoding, CredentialsEncoding, CustodianInfo,
    DeskIdEncoding, ImpliedEventId, InboundBusinessHeader, InvestorId, MemoEncoding,
    OutboundBusinessHeader, TextEncoding, Version,
};
pub use fields::*;
pub use fix::{FixComposite, FixValue, FixWriter};
pub use framing::{
    FrameDecoder, FrameEncoder, NetworkMessage, Sofh, MAX_MESSAGE_SIZE, SBE_ENCODING_TYPE,
    SOFH_SIZE,
};
pub use holder::{FrameBuffer, MessageHolder};
pub use messages::*;
pub use schema::{
    check_version, BoeMessage, BoeMessageMut, Decoded, DEFAULT_MAX_GROUP_ITEMS,
    MINIMAL_SCHEMA_VERSION, SCHEMA_DESCRIPTION, SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION,
};
pub use typify::{process_typified, AnyMessage};
