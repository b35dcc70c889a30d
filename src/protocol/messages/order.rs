//! Order entry messages sent by the client

use crate::core::{LocalMktDate, Price};
use crate::protocol::composites::{
    CustodianInfo, DeskIdEncoding, InboundBusinessHeader, InvestorId, MemoEncoding,
};
use crate::protocol::fields::{
    AccountType, Boolean, CrossPrioritization, CrossType, CrossedIndicator, MessageType, OrdType,
    RoutingInstruction, SecurityIdSource, SelfTradePreventionInstruction, Side, SimpleOrdType,
    SimpleTimeInForce, TimeInForce,
};

/// Exchange of every instrument traded through this gateway.
pub const SECURITY_EXCHANGE: &str = "BVMF";
/// Instruments are identified by the exchange symbol id.
pub const SECURITY_ID_SOURCE: SecurityIdSource = SecurityIdSource::ExchangeSymbol;

sbe_message! {
    /// Limit or market order with the reduced field set.
    pub struct SimpleNewOrder100 {
        template_id: 100,
        message_type: MessageType::SimpleNewOrder,
        fix_type: "NewOrderSingle",
        block_length: 84,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 18 tag 35001;
            mm_protection_reset, set_mm_protection_reset: enumeration(Boolean) @ 19 tag 35002;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            account, set_account: optional(u32 = 0) @ 28 tag 1;
            sender_location, set_sender_location: fixed_str(10) @ 32 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 42 tag 35004;
            self_trade_prevention_instruction, set_self_trade_prevention_instruction: enumeration(SelfTradePreventionInstruction) @ 47 tag 2964;
            security_id, set_security_id: ordinary(u64) @ 48 tag 48;
            side, set_side: enumeration(Side) @ 56 tag 54;
            ord_type, set_ord_type: enumeration(SimpleOrdType) @ 57 tag 40;
            time_in_force, set_time_in_force: enumeration(SimpleTimeInForce) @ 58 tag 59;
            routing_instruction, set_routing_instruction: optional_enum(RoutingInstruction = 0) @ 59 tag 35006;
            order_qty, set_order_qty: ordinary(u64) @ 60 tag 38;
            /// Required for limit orders.
            price, set_price: optional(Price = Price::NULL) @ 68 tag 44;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 76;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct SimpleModifyOrder101 {
        template_id: 101,
        message_type: MessageType::SimpleModifyOrder,
        fix_type: "OrderCancelReplaceRequest",
        block_length: 100,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 18 tag 35001;
            mm_protection_reset, set_mm_protection_reset: enumeration(Boolean) @ 19 tag 35002;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            account, set_account: optional(u32 = 0) @ 28 tag 1;
            sender_location, set_sender_location: fixed_str(10) @ 32 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 42 tag 35004;
            self_trade_prevention_instruction, set_self_trade_prevention_instruction: enumeration(SelfTradePreventionInstruction) @ 47 tag 2964;
            security_id, set_security_id: ordinary(u64) @ 48 tag 48;
            side, set_side: enumeration(Side) @ 56 tag 54;
            ord_type, set_ord_type: enumeration(SimpleOrdType) @ 57 tag 40;
            time_in_force, set_time_in_force: enumeration(SimpleTimeInForce) @ 58 tag 59;
            routing_instruction, set_routing_instruction: optional_enum(RoutingInstruction = 0) @ 59 tag 35006;
            order_qty, set_order_qty: ordinary(u64) @ 60 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 68 tag 44;
            /// Either `order_id` or `orig_cl_ord_id` identifies the order.
            order_id, set_order_id: optional(u64 = 0) @ 76 tag 37;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 84 tag 41;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 92;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    /// Full featured new order.
    pub struct NewOrderSingle102 {
        template_id: 102,
        message_type: MessageType::NewOrderSingle,
        fix_type: "NewOrderSingle",
        block_length: 127,
        since_versions: { 4 => 131, 5 => 135 },
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 18 tag 35001;
            mm_protection_reset, set_mm_protection_reset: enumeration(Boolean) @ 19 tag 35002;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            account, set_account: optional(u32 = 0) @ 28 tag 1;
            sender_location, set_sender_location: fixed_str(10) @ 32 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 42 tag 35004;
            self_trade_prevention_instruction, set_self_trade_prevention_instruction: enumeration(SelfTradePreventionInstruction) @ 47 tag 2964;
            security_id, set_security_id: ordinary(u64) @ 48 tag 48;
            side, set_side: enumeration(Side) @ 56 tag 54;
            ord_type, set_ord_type: enumeration(OrdType) @ 57 tag 40;
            time_in_force, set_time_in_force: optional_enum(TimeInForce = 0) @ 58 tag 59;
            routing_instruction, set_routing_instruction: optional_enum(RoutingInstruction = 0) @ 59 tag 35006;
            order_qty, set_order_qty: ordinary(u64) @ 60 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 68 tag 44;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 76 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 84 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 92 tag 111;
            executing_trader, set_executing_trader: fixed_str(5) @ 100 tag 35005;
            /// Only for `GoodTillDate` orders.
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 105 tag 432;
            custodian_info, set_custodian_info: optional_composite(CustodianInfo) @ 107;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 119;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 127 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 131 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct OrderCancelReplaceRequest104 {
        template_id: 104,
        message_type: MessageType::OrderCancelReplaceRequest,
        fix_type: "OrderCancelReplaceRequest",
        block_length: 144,
        since_versions: { 4 => 148, 5 => 152 },
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 18 tag 35001;
            mm_protection_reset, set_mm_protection_reset: enumeration(Boolean) @ 19 tag 35002;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            account, set_account: optional(u32 = 0) @ 28 tag 1;
            sender_location, set_sender_location: fixed_str(10) @ 32 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 42 tag 35004;
            self_trade_prevention_instruction, set_self_trade_prevention_instruction: enumeration(SelfTradePreventionInstruction) @ 47 tag 2964;
            security_id, set_security_id: ordinary(u64) @ 48 tag 48;
            side, set_side: enumeration(Side) @ 56 tag 54;
            ord_type, set_ord_type: enumeration(OrdType) @ 57 tag 40;
            time_in_force, set_time_in_force: optional_enum(TimeInForce = 0) @ 58 tag 59;
            routing_instruction, set_routing_instruction: optional_enum(RoutingInstruction = 0) @ 59 tag 35006;
            order_qty, set_order_qty: ordinary(u64) @ 60 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 68 tag 44;
            order_id, set_order_id: optional(u64 = 0) @ 76 tag 37;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 84 tag 41;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 92 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 100 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 108 tag 111;
            executing_trader, set_executing_trader: fixed_str(5) @ 116 tag 35005;
            account_type, set_account_type: optional_enum(AccountType = 0) @ 121 tag 581;
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 122 tag 432;
            custodian_info, set_custodian_info: optional_composite(CustodianInfo) @ 124;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 136;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 144 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 148 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct OrderCancelRequest105 {
        template_id: 105,
        message_type: MessageType::OrderCancelRequest,
        fix_type: "OrderCancelRequest",
        block_length: 72,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 18 tag 11;
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            order_id, set_order_id: optional(u64 = 0) @ 34 tag 37;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 42 tag 41;
            side, set_side: enumeration(Side) @ 50 tag 54;
            sender_location, set_sender_location: fixed_str(10) @ 52 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 62 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 67 tag 35005;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_group_entry! {
    /// One side of a cross order.
    pub struct NewOrderCrossSidesEntry {
        block_length: 18,
        fields: {
            side, set_side: enumeration(Side) @ 0 tag 54;
            account, set_account: optional(u32 = 0) @ 2 tag 1;
            entering_firm, set_entering_firm: optional(u32 = 0) @ 6 tag 35016;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 10 tag 11;
        },
    }
}

sbe_message! {
    /// Two-sided order crossing buyer and seller.
    pub struct NewOrderCross106 {
        template_id: 106,
        message_type: MessageType::NewOrderCross,
        fix_type: "NewOrderCross",
        block_length: 82,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            cross_id, set_cross_id: ordinary(u64) @ 18 tag 548;
            sender_location, set_sender_location: fixed_str(10) @ 26 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 36 tag 35004;
            executing_trader, set_executing_trader: fixed_str(5) @ 41 tag 35005;
            security_id, set_security_id: ordinary(u64) @ 46 tag 48;
            order_qty, set_order_qty: ordinary(u64) @ 54 tag 38;
            price, set_price: ordinary(Price) @ 62 tag 44;
            crossed_indicator, set_crossed_indicator: optional_enum(CrossedIndicator = 0) @ 70 tag 2523;
            cross_type, set_cross_type: optional_enum(CrossType = 0) @ 72 tag 549;
            cross_prioritization, set_cross_prioritization: optional_enum(CrossPrioritization = 255) @ 73 tag 550;
            max_sweep_qty, set_max_sweep_qty: optional(u64 = 0) @ 74 tag 35012;
        },
        groups: {
            sides, setup_sides, sides_mut: NewOrderCrossSidesEntry tag 552;
        },
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}
