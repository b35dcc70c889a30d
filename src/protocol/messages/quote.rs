//! Termo (forward) quote negotiation
//!
//! Semua message di sini memakai bidirectional header karena dikirim oleh
//! kedua sisi (client dan gateway).

use crate::core::{Percentage8, Price8, UtcTimestampNanos};
use crate::protocol::composites::{
    BidirectionalBusinessHeader, DeskIdEncoding, MemoEncoding, TextEncoding,
};
use crate::protocol::fields::{
    ExecuteUnderlyingTrade, MessageType, QuoteCancelType, QuoteStatus, QuoteStatusResponseTo,
    SettlType, Side,
};

/// Quote cancels always refer to a single quote.
pub const QUOTE_CANCEL_TYPE: QuoteCancelType = QuoteCancelType::CancelForQuoteId;

sbe_group_entry! {
    pub struct QuoteRequestSidesEntry {
        block_length: 9,
        fields: {
            side, set_side: enumeration(Side) @ 0 tag 54;
            account, set_account: optional(u32 = 0) @ 1 tag 1;
            entering_firm, set_entering_firm: optional(u32 = 0) @ 5 tag 35016;
        },
    }
}

sbe_message! {
    pub struct QuoteRequest401 {
        template_id: 401,
        message_type: MessageType::QuoteRequest,
        fix_type: "QuoteRequest",
        block_length: 89,
        fields: {
            business_header, set_business_header: composite(BidirectionalBusinessHeader) @ 0;
            security_id, set_security_id: ordinary(u64) @ 20 tag 48;
            quote_req_id, set_quote_req_id: ordinary(u64) @ 28 tag 131;
            trade_id, set_trade_id: optional(u32 = 0) @ 36 tag 1003;
            contra_broker, set_contra_broker: ordinary(u32) @ 40 tag 375;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 44 tag 60;
            price, set_price: optional(Price8 = Price8::NULL) @ 52 tag 44;
            settl_type, set_settl_type: enumeration(SettlType) @ 60 tag 63;
            order_qty, set_order_qty: ordinary(u64) @ 61 tag 38;
            sender_location, set_sender_location: fixed_str(10) @ 69 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 79 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 84 tag 35005;
        },
        groups: {
            sides, setup_sides, sides_mut: QuoteRequestSidesEntry tag 552;
        },
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct QuoteStatusReport402 {
        template_id: 402,
        message_type: MessageType::QuoteStatusReport,
        fix_type: "QuoteStatusReport",
        block_length: 119,
        fields: {
            business_header, set_business_header: composite(BidirectionalBusinessHeader) @ 0;
            quote_reject_reason, set_quote_reject_reason: optional(u32 = 0) @ 20 tag 300;
            security_id, set_security_id: ordinary(u64) @ 24 tag 48;
            quote_id, set_quote_id: optional(u64 = 0) @ 32 tag 117;
            quote_req_id, set_quote_req_id: ordinary(u64) @ 40 tag 131;
            trade_id, set_trade_id: optional(u32 = 0) @ 48 tag 1003;
            contra_broker, set_contra_broker: optional(u32 = 0) @ 52 tag 375;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 56 tag 60;
            quote_status, set_quote_status: enumeration(QuoteStatus) @ 64 tag 297;
            quote_status_response_to, set_quote_status_response_to: optional_enum(QuoteStatusResponseTo = 0) @ 65 tag 649;
            account, set_account: optional(u32 = 0) @ 66 tag 1;
            side, set_side: optional_enum(Side = 0) @ 70 tag 54;
            settl_type, set_settl_type: optional_enum(SettlType = 0) @ 71 tag 63;
            price, set_price: optional(Price8 = Price8::NULL) @ 72 tag 44;
            order_qty, set_order_qty: optional(u64 = 0) @ 80 tag 38;
            sender_location, set_sender_location: fixed_str(10) @ 88 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 98 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 103 tag 35005;
            fixed_rate, set_fixed_rate: optional(Percentage8 = Percentage8::NULL) @ 108 tag 5706;
            execute_underlying_trade, set_execute_underlying_trade: optional_enum(ExecuteUnderlyingTrade = 0) @ 116 tag 35013;
            days_to_settlement, set_days_to_settlement: optional(u16 = 65535) @ 117 tag 5497;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
            text, set_text: TextEncoding tag 58;
        },
    }
}

sbe_message! {
    pub struct Quote403 {
        template_id: 403,
        message_type: MessageType::Quote,
        fix_type: "Quote",
        block_length: 97,
        fields: {
            business_header, set_business_header: composite(BidirectionalBusinessHeader) @ 0;
            security_id, set_security_id: ordinary(u64) @ 20 tag 48;
            quote_id, set_quote_id: ordinary(u64) @ 28 tag 117;
            quote_req_id, set_quote_req_id: ordinary(u64) @ 36 tag 131;
            account, set_account: optional(u32 = 0) @ 44 tag 1;
            side, set_side: optional_enum(Side = 0) @ 48 tag 54;
            settl_type, set_settl_type: enumeration(SettlType) @ 49 tag 63;
            price, set_price: optional(Price8 = Price8::NULL) @ 50 tag 44;
            order_qty, set_order_qty: ordinary(u64) @ 58 tag 38;
            sender_location, set_sender_location: fixed_str(10) @ 66 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 76 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 81 tag 35005;
            fixed_rate, set_fixed_rate: ordinary(Percentage8) @ 86 tag 5706;
            execute_underlying_trade, set_execute_underlying_trade: enumeration(ExecuteUnderlyingTrade) @ 94 tag 35013;
            days_to_settlement, set_days_to_settlement: ordinary(u16) @ 95 tag 5497;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct QuoteCancel404 {
        template_id: 404,
        message_type: MessageType::QuoteCancel,
        fix_type: "QuoteCancel",
        block_length: 68,
        fields: {
            business_header, set_business_header: composite(BidirectionalBusinessHeader) @ 0;
            security_id, set_security_id: ordinary(u64) @ 20 tag 48;
            account, set_account: optional(u32 = 0) @ 28 tag 1;
            quote_id, set_quote_id: optional(u64 = 0) @ 32 tag 117;
            quote_req_id, set_quote_req_id: ordinary(u64) @ 40 tag 131;
            sender_location, set_sender_location: fixed_str(10) @ 48 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 58 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 63 tag 35005;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct QuoteRequestReject405 {
        template_id: 405,
        message_type: MessageType::QuoteRequestReject,
        fix_type: "QuoteRequestReject",
        block_length: 84,
        fields: {
            business_header, set_business_header: composite(BidirectionalBusinessHeader) @ 0;
            quote_request_reject_reason, set_quote_request_reject_reason: optional(u32 = 0) @ 20 tag 658;
            security_id, set_security_id: ordinary(u64) @ 24 tag 48;
            quote_req_id, set_quote_req_id: ordinary(u64) @ 32 tag 131;
            quote_id, set_quote_id: optional(u64 = 0) @ 40 tag 117;
            trade_id, set_trade_id: optional(u32 = 0) @ 48 tag 1003;
            contra_broker, set_contra_broker: optional(u32 = 0) @ 52 tag 375;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 56 tag 60;
            sender_location, set_sender_location: fixed_str(10) @ 64 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 74 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 79 tag 35005;
        },
        groups: {
            sides, setup_sides, sides_mut: QuoteRequestSidesEntry tag 552;
        },
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
            text, set_text: TextEncoding tag 58;
        },
    }
}
