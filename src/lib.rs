//! b3-boe: Zero-Copy SBE flyweights for the B3 Binary Order Entry protocol
//!
//! Arsitektur:
//! - `core`: SBE codec runtime (header, fields, groups, var data, journal)
//! - `protocol`: BOE schema, message catalogue, framing dan batching
//!
//! ```ignore
//! use b3_boe::protocol::{FrameBuffer, MessageHolder, Side, SimpleNewOrder100};
//!
//! let mut order = MessageHolder::<SimpleNewOrder100<FrameBuffer>>::new()?;
//! order.set_cl_ord_id(1).set_side(Side::Buy).set_order_qty(100);
//! let frame = order.to_network_message()?;
//! ```

pub mod core;
pub mod protocol;
