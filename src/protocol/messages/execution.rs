//! Execution reports and business rejects sent by the gateway

use crate::core::{LocalMktDate, Percentage8, Price, UtcTimestampNanos};
use crate::protocol::composites::{
    DeskIdEncoding, ImpliedEventId, InvestorId, MemoEncoding, OutboundBusinessHeader,
    TextEncoding,
};
use crate::protocol::fields::{
    Boolean, CrossPrioritization, CrossType, CrossedIndicator, CxlRejResponseTo,
    ExecRestatementReason, ExecType, MessageType, MultiLegReportingType, OrdStatus, OrdType,
    OrderCategory, SettlType, Side, TimeInForce,
};

sbe_message! {
    /// Order accepted by the matching engine.
    pub struct ExecutionReportNew200 {
        template_id: 200,
        message_type: MessageType::ExecutionReportNew,
        fix_type: "ExecutionReport",
        block_length: 164,
        since_versions: { 4 => 168, 5 => 172 },
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            secondary_order_id, set_secondary_order_id: ordinary(u64) @ 28 tag 198;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            order_id, set_order_id: ordinary(u64) @ 44 tag 37;
            account, set_account: optional(u32 = 0) @ 52 tag 1;
            exec_id, set_exec_id: ordinary(u64) @ 56 tag 17;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 64 tag 60;
            market_segment_received_time, set_market_segment_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 72 tag 35008;
            protection_price, set_protection_price: optional(Price = Price::NULL) @ 80 tag 35007;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 88 tag 75;
            working_indicator, set_working_indicator: optional_enum(Boolean = 255) @ 90 tag 636;
            multi_leg_reporting_type, set_multi_leg_reporting_type: optional_enum(MultiLegReportingType = 0) @ 91 tag 442;
            ord_type, set_ord_type: enumeration(OrdType) @ 92 tag 40;
            time_in_force, set_time_in_force: enumeration(TimeInForce) @ 93 tag 59;
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 94 tag 432;
            order_qty, set_order_qty: ordinary(u64) @ 96 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 104 tag 44;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 112 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 120 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 128 tag 111;
            cross_id, set_cross_id: optional(u64 = 0) @ 136 tag 548;
            received_time, set_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 144 tag 35009;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 152 tag 35001;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 153;
            cross_type, set_cross_type: optional_enum(CrossType = 0) @ 161 tag 549;
            cross_prioritization, set_cross_prioritization: optional_enum(CrossPrioritization = 255) @ 162 tag 550;
            mm_protection_reset, set_mm_protection_reset: optional_enum(Boolean = 255) @ 163 tag 35002;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 164 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 168 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct ExecutionReportModify201 {
        template_id: 201,
        message_type: MessageType::ExecutionReportModify,
        fix_type: "ExecutionReport",
        block_length: 178,
        since_versions: { 4 => 182, 5 => 186 },
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            secondary_order_id, set_secondary_order_id: ordinary(u64) @ 28 tag 198;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            leaves_qty, set_leaves_qty: ordinary(u64) @ 44 tag 151;
            account, set_account: optional(u32 = 0) @ 52 tag 1;
            exec_id, set_exec_id: ordinary(u64) @ 56 tag 17;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 64 tag 60;
            cum_qty, set_cum_qty: ordinary(u64) @ 72 tag 14;
            market_segment_received_time, set_market_segment_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 80 tag 35008;
            order_id, set_order_id: ordinary(u64) @ 88 tag 37;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 96 tag 41;
            protection_price, set_protection_price: optional(Price = Price::NULL) @ 104 tag 35007;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 112 tag 75;
            working_indicator, set_working_indicator: optional_enum(Boolean = 255) @ 114 tag 636;
            multi_leg_reporting_type, set_multi_leg_reporting_type: optional_enum(MultiLegReportingType = 0) @ 115 tag 442;
            ord_type, set_ord_type: enumeration(OrdType) @ 116 tag 40;
            time_in_force, set_time_in_force: enumeration(TimeInForce) @ 117 tag 59;
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 118 tag 432;
            order_qty, set_order_qty: ordinary(u64) @ 120 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 128 tag 44;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 136 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 144 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 152 tag 111;
            received_time, set_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 160 tag 35009;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 168 tag 35001;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 169;
            mm_protection_reset, set_mm_protection_reset: optional_enum(Boolean = 255) @ 177 tag 35002;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 178 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 182 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    pub struct ExecutionReportCancel202 {
        template_id: 202,
        message_type: MessageType::ExecutionReportCancel,
        fix_type: "ExecutionReport",
        block_length: 170,
        since_versions: { 4 => 174, 5 => 178 },
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            secondary_order_id, set_secondary_order_id: ordinary(u64) @ 28 tag 198;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            cum_qty, set_cum_qty: ordinary(u64) @ 44 tag 14;
            account, set_account: optional(u32 = 0) @ 52 tag 1;
            exec_id, set_exec_id: ordinary(u64) @ 56 tag 17;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 64 tag 60;
            market_segment_received_time, set_market_segment_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 72 tag 35008;
            order_id, set_order_id: ordinary(u64) @ 80 tag 37;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 88 tag 41;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 96 tag 75;
            working_indicator, set_working_indicator: optional_enum(Boolean = 255) @ 98 tag 636;
            /// Why the gateway cancelled the order, when it was not the client.
            exec_restatement_reason, set_exec_restatement_reason: optional_enum(ExecRestatementReason = 0) @ 99 tag 378;
            ord_type, set_ord_type: enumeration(OrdType) @ 100 tag 40;
            time_in_force, set_time_in_force: enumeration(TimeInForce) @ 101 tag 59;
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 102 tag 432;
            order_qty, set_order_qty: ordinary(u64) @ 104 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 112 tag 44;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 120 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 128 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 136 tag 111;
            cross_id, set_cross_id: optional(u64 = 0) @ 144 tag 548;
            received_time, set_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 152 tag 35009;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 160 tag 35001;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 161;
            mm_protection_reset, set_mm_protection_reset: optional_enum(Boolean = 255) @ 169 tag 35002;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 170 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 174 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    /// Fill (or trade bust) of an order.
    pub struct ExecutionReportTrade203 {
        template_id: 203,
        message_type: MessageType::ExecutionReportTrade,
        fix_type: "ExecutionReport",
        block_length: 159,
        since_versions: { 5 => 163 },
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: optional(u64 = 0) @ 20 tag 11;
            secondary_order_id, set_secondary_order_id: ordinary(u64) @ 28 tag 198;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            account, set_account: optional(u32 = 0) @ 44 tag 1;
            last_qty, set_last_qty: ordinary(u64) @ 48 tag 32;
            last_px, set_last_px: ordinary(Price) @ 56 tag 31;
            exec_id, set_exec_id: ordinary(u64) @ 64 tag 17;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 72 tag 60;
            leaves_qty, set_leaves_qty: ordinary(u64) @ 80 tag 151;
            cum_qty, set_cum_qty: ordinary(u64) @ 88 tag 14;
            aggressor_indicator, set_aggressor_indicator: enumeration(Boolean) @ 96 tag 1057;
            exec_type, set_exec_type: enumeration(ExecType) @ 97 tag 150;
            order_category, set_order_category: optional_enum(OrderCategory = 0) @ 98 tag 1115;
            multi_leg_reporting_type, set_multi_leg_reporting_type: optional_enum(MultiLegReportingType = 0) @ 99 tag 442;
            trade_id, set_trade_id: ordinary(u32) @ 100 tag 1003;
            contra_broker, set_contra_broker: ordinary(u32) @ 104 tag 375;
            order_id, set_order_id: ordinary(u64) @ 108 tag 37;
            trade_date, set_trade_date: ordinary(LocalMktDate) @ 116 tag 75;
            tot_no_related_sym, set_tot_no_related_sym: optional(u8 = 0) @ 118 tag 393;
            secondary_exec_id, set_secondary_exec_id: optional(u64 = 0) @ 119 tag 527;
            exec_ref_id, set_exec_ref_id: optional(u64 = 0) @ 127 tag 19;
            cross_id, set_cross_id: optional(u64 = 0) @ 135 tag 548;
            crossed_indicator, set_crossed_indicator: optional_enum(CrossedIndicator = 0) @ 143 tag 2523;
            order_qty, set_order_qty: ordinary(u64) @ 145 tag 38;
            implied_event_id, set_implied_event_id: optional_composite(ImpliedEventId) @ 153;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 159 tag 35011 since 5;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    /// Rejection of a new, modify or cancel request.
    pub struct ExecutionReportReject204 {
        template_id: 204,
        message_type: MessageType::ExecutionReportReject,
        fix_type: "ExecutionReport",
        block_length: 166,
        since_versions: { 4 => 170, 5 => 174 },
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            orig_cl_ord_id, set_orig_cl_ord_id: optional(u64 = 0) @ 28 tag 41;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            cxl_rej_response_to, set_cxl_rej_response_to: enumeration(CxlRejResponseTo) @ 44 tag 434;
            ord_rej_reason, set_ord_rej_reason: ordinary(u32) @ 48 tag 103;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 52 tag 60;
            exec_id, set_exec_id: ordinary(u64) @ 60 tag 17;
            order_id, set_order_id: optional(u64 = 0) @ 68 tag 37;
            secondary_order_id, set_secondary_order_id: optional(u64 = 0) @ 76 tag 198;
            account, set_account: optional(u32 = 0) @ 84 tag 1;
            ord_type, set_ord_type: optional_enum(OrdType = 0) @ 88 tag 40;
            time_in_force, set_time_in_force: optional_enum(TimeInForce = 0) @ 89 tag 59;
            expire_date, set_expire_date: optional(LocalMktDate = LocalMktDate::NULL) @ 90 tag 432;
            order_qty, set_order_qty: optional(u64 = 0) @ 92 tag 38;
            price, set_price: optional(Price = Price::NULL) @ 100 tag 44;
            stop_px, set_stop_px: optional(Price = Price::NULL) @ 108 tag 99;
            min_qty, set_min_qty: optional(u64 = 0) @ 116 tag 110;
            max_floor, set_max_floor: optional(u64 = 0) @ 124 tag 111;
            cross_id, set_cross_id: optional(u64 = 0) @ 132 tag 548;
            crossed_indicator, set_crossed_indicator: optional_enum(CrossedIndicator = 0) @ 140 tag 2523;
            received_time, set_received_time: optional(UtcTimestampNanos = UtcTimestampNanos::NULL) @ 142 tag 35009;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 150 tag 35001;
            investor_id, set_investor_id: optional_composite(InvestorId) @ 151;
            cross_type, set_cross_type: optional_enum(CrossType = 0) @ 159 tag 549;
            cross_prioritization, set_cross_prioritization: optional_enum(CrossPrioritization = 255) @ 160 tag 550;
            mm_protection_reset, set_mm_protection_reset: optional_enum(Boolean = 255) @ 161 tag 35002;
            working_indicator, set_working_indicator: optional_enum(Boolean = 255) @ 162 tag 636;
            multi_leg_reporting_type, set_multi_leg_reporting_type: optional_enum(MultiLegReportingType = 0) @ 163 tag 442;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 164 tag 75;
            trading_sub_account, set_trading_sub_account: optional(u32 = 0) @ 166 tag 35010 since 4;
            strategy_id, set_strategy_id: optional(i32 = 0) @ 170 tag 35011 since 5;
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
    /// Forward of a termo (forward settlement) trade.
    pub struct ExecutionReportForward205 {
        template_id: 205,
        message_type: MessageType::ExecutionReportForward,
        fix_type: "ExecutionReport",
        block_length: 151,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            side, set_side: enumeration(Side) @ 18 tag 54;
            ord_status, set_ord_status: enumeration(OrdStatus) @ 19 tag 39;
            cl_ord_id, set_cl_ord_id: optional(u64 = 0) @ 20 tag 11;
            secondary_order_id, set_secondary_order_id: ordinary(u64) @ 28 tag 198;
            security_id, set_security_id: ordinary(u64) @ 36 tag 48;
            account, set_account: optional(u32 = 0) @ 44 tag 1;
            last_qty, set_last_qty: ordinary(u64) @ 48 tag 32;
            last_px, set_last_px: ordinary(Price) @ 56 tag 31;
            exec_id, set_exec_id: ordinary(u64) @ 64 tag 17;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 72 tag 60;
            leaves_qty, set_leaves_qty: ordinary(u64) @ 80 tag 151;
            cum_qty, set_cum_qty: ordinary(u64) @ 88 tag 14;
            trade_id, set_trade_id: ordinary(u32) @ 96 tag 1003;
            contra_broker, set_contra_broker: ordinary(u32) @ 100 tag 375;
            order_id, set_order_id: ordinary(u64) @ 104 tag 37;
            trade_date, set_trade_date: ordinary(LocalMktDate) @ 112 tag 75;
            order_qty, set_order_qty: ordinary(u64) @ 114 tag 38;
            settl_type, set_settl_type: optional_enum(SettlType = 0) @ 122 tag 63;
            days_to_settlement, set_days_to_settlement: optional(u16 = 65535) @ 123 tag 5497;
            fixed_rate, set_fixed_rate: optional(Percentage8 = Percentage8::NULL) @ 125 tag 5706;
            secondary_exec_id, set_secondary_exec_id: optional(u64 = 0) @ 133 tag 527;
            exec_ref_id, set_exec_ref_id: optional(u64 = 0) @ 141 tag 19;
            crossed_indicator, set_crossed_indicator: optional_enum(CrossedIndicator = 0) @ 149 tag 2523;
        },
        groups: {},
        data: {
            desk_id, set_desk_id: DeskIdEncoding tag 284;
            memo, set_memo: MemoEncoding tag 5149;
        },
    }
}

sbe_message! {
    /// Application level reject of a message that passed session checks.
    pub struct BusinessMessageReject206 {
        template_id: 206,
        message_type: MessageType::BusinessMessageReject,
        fix_type: "BusinessMessageReject",
        block_length: 36,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            ref_msg_type, set_ref_msg_type: enumeration(MessageType) @ 18 tag 372;
            ref_seq_num, set_ref_seq_num: ordinary(u32) @ 20 tag 45;
            business_reject_ref_id, set_business_reject_ref_id: optional(u64 = 0) @ 24 tag 379;
            business_reject_reason, set_business_reject_reason: ordinary(u32) @ 32 tag 380;
        },
        groups: {},
        data: {
            memo, set_memo: MemoEncoding tag 5149;
            text, set_text: TextEncoding tag 58;
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HEADER_SIZE;

    #[test]
    fn test_trade_report_v4_has_no_strategy() {
        let mut buf = [0u8; 256];
        let mut msg = ExecutionReportTrade203::with_version(&mut buf[..], 4).unwrap();
        assert_eq!(msg.header().block_length, 159);
        msg.set_last_qty(300)
            .set_last_px(Price::from_mantissa(25_5000))
            .set_exec_type(ExecType::Trade)
            .set_aggressor_indicator(Boolean::True);

        assert!(msg.set_strategy_id(Some(9)).is_err());
        let size = msg.calculate_binary_size();
        let decoded = ExecutionReportTrade203::wrap(&buf[..size]).unwrap();
        assert_eq!(decoded.version(), 4);
        assert_eq!(decoded.strategy_id(), None);
        assert_eq!(decoded.last_qty(), 300);
        assert_eq!(decoded.implied_event_id(), None);
    }

    #[test]
    fn test_wrap_rejects_truncated_block() {
        let mut buf = [0u8; 256];
        let msg = ExecutionReportNew200::new(&mut buf[..]).unwrap();
        let size = msg.calculate_binary_size();

        assert!(ExecutionReportNew200::wrap(&buf[..size]).is_ok());
        assert!(ExecutionReportNew200::wrap(&buf[..HEADER_SIZE + 100]).is_err());
    }

    #[test]
    fn test_business_reject_text() {
        let mut buf = [0u8; 512];
        let mut msg = BusinessMessageReject206::new(&mut buf[..]).unwrap();
        msg.set_ref_msg_type(MessageType::NewOrderSingle)
            .set_ref_seq_num(17)
            .set_business_reject_reason(33);
        msg.set_text("Invalid security").unwrap();
        msg.set_memo("m").unwrap();

        assert_eq!(msg.ref_msg_type(), Ok(MessageType::NewOrderSingle));
        assert_eq!(msg.memo(), "m");
        assert_eq!(msg.text(), "Invalid security");
        assert_eq!(msg.business_reject_ref_id(), None);
    }

    #[test]
    fn test_debug_lists_fields() {
        let mut buf = [0u8; 256];
        let mut msg = ExecutionReportCancel202::new(&mut buf[..]).unwrap();
        msg.set_side(Side::Sell).set_ord_status(OrdStatus::Canceled);

        let rendered = format!("{msg:?}");
        assert!(rendered.starts_with("ExecutionReportCancel202 {"));
        assert!(rendered.contains("side: Sell"));
        assert!(rendered.contains("ord_status: Canceled"));
        assert!(rendered.contains("exec_restatement_reason: None"));
    }
}
