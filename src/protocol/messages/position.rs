//! Position maintenance (option exercise)

use crate::core::{LocalMktDate, PriceOffset, UtcTimestampNanos};
use crate::protocol::composites::{InboundBusinessHeader, OutboundBusinessHeader, TextEncoding};
use crate::protocol::fields::{
    AccountType, Boolean, MessageType, PosMaintAction, PosMaintStatus, PosTransType, PosType,
};

sbe_group_entry! {
    pub struct PositionMaintenanceRequestPositionsEntry {
        block_length: 9,
        fields: {
            pos_type, set_pos_type: enumeration(PosType) @ 0 tag 703;
            long_qty, set_long_qty: optional(u64 = 0) @ 1 tag 704;
        },
    }
}

sbe_group_entry! {
    pub struct PositionMaintenanceReportPositionsEntry {
        block_length: 17,
        fields: {
            pos_type, set_pos_type: enumeration(PosType) @ 0 tag 703;
            long_qty, set_long_qty: optional(u64 = 0) @ 1 tag 704;
            short_qty, set_short_qty: optional(u64 = 0) @ 9 tag 705;
        },
    }
}

sbe_message! {
    pub struct PositionMaintenanceCancelRequest501 {
        template_id: 501,
        message_type: MessageType::PositionMaintenanceCancelRequest,
        fix_type: "PositionMaintenanceRequest",
        block_length: 65,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            pos_req_id, set_pos_req_id: ordinary(u64) @ 18 tag 710;
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            orig_pos_req_ref_id, set_orig_pos_req_ref_id: optional(u64 = 0) @ 34 tag 713;
            pos_maint_rpt_ref_id, set_pos_maint_rpt_ref_id: optional(u64 = 0) @ 42 tag 714;
            sender_location, set_sender_location: fixed_str(10) @ 50 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 60 tag 35004;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    /// Exercise request for an option position.
    pub struct PositionMaintenanceRequest502 {
        template_id: 502,
        message_type: MessageType::PositionMaintenanceRequest,
        fix_type: "PositionMaintenanceRequest",
        block_length: 65,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            pos_req_id, set_pos_req_id: ordinary(u64) @ 18 tag 710;
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            account, set_account: ordinary(u32) @ 34 tag 1;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 38 tag 75;
            pos_trans_type, set_pos_trans_type: enumeration(PosTransType) @ 40 tag 709;
            sender_location, set_sender_location: fixed_str(10) @ 41 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 51 tag 35004;
            contrary_instruction_indicator, set_contrary_instruction_indicator: enumeration(Boolean) @ 56 tag 719;
            threshold_amount, set_threshold_amount: optional(PriceOffset = PriceOffset::NULL) @ 57 tag 834;
        },
        groups: {
            positions, setup_positions, positions_mut: PositionMaintenanceRequestPositionsEntry tag 702;
        },
        data: {},
    }
}

sbe_message! {
    pub struct PositionMaintenanceReport503 {
        template_id: 503,
        message_type: MessageType::PositionMaintenanceReport,
        fix_type: "PositionMaintenanceReport",
        block_length: 95,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            pos_req_id, set_pos_req_id: optional(u64 = 0) @ 18 tag 710;
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            pos_maint_rpt_id, set_pos_maint_rpt_id: ordinary(u64) @ 34 tag 721;
            pos_trans_type, set_pos_trans_type: enumeration(PosTransType) @ 42 tag 709;
            pos_maint_action, set_pos_maint_action: enumeration(PosMaintAction) @ 43 tag 712;
            pos_maint_status, set_pos_maint_status: enumeration(PosMaintStatus) @ 44 tag 722;
            trade_id, set_trade_id: optional(u32 = 0) @ 45 tag 1003;
            orig_pos_req_ref_id, set_orig_pos_req_ref_id: optional(u64 = 0) @ 49 tag 713;
            account_type, set_account_type: optional_enum(AccountType = 0) @ 57 tag 581;
            clearing_business_date, set_clearing_business_date: ordinary(LocalMktDate) @ 58 tag 715;
            threshold_amount, set_threshold_amount: optional(PriceOffset = PriceOffset::NULL) @ 60 tag 834;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 68 tag 60;
            account, set_account: optional(u32 = 0) @ 76 tag 1;
            sender_location, set_sender_location: fixed_str(10) @ 80 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 90 tag 35004;
        },
        groups: {
            positions, setup_positions, positions_mut: PositionMaintenanceReportPositionsEntry tag 702;
        },
        data: {
            text, set_text: TextEncoding tag 58;
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_request() {
        let mut buf = [0u8; 256];
        let mut msg = PositionMaintenanceRequest502::new(&mut buf[..]).unwrap();
        msg.set_pos_req_id(77)
            .set_account(4_321)
            .set_pos_trans_type(PosTransType::Exercise)
            .set_contrary_instruction_indicator(Boolean::False);
        msg.setup_positions(1)
            .unwrap()
            .into_entry(0)
            .unwrap()
            .set_pos_type(PosType::TransactionQuantity)
            .set_long_qty(Some(500));

        let size = msg.calculate_binary_size();
        let decoded = PositionMaintenanceRequest502::wrap(&buf[..size]).unwrap();
        assert_eq!(decoded.threshold_amount(), None);
        let position = decoded.positions().get(0).unwrap();
        assert_eq!(position.pos_type(), Ok(PosType::TransactionQuantity));
        assert_eq!(position.long_qty(), Some(500));
    }

    #[test]
    fn test_report_positions_start_null() {
        let mut buf = [0u8; 256];
        let mut msg = PositionMaintenanceReport503::new(&mut buf[..]).unwrap();
        msg.setup_positions(2).unwrap();
        msg.set_text("exercised").unwrap();

        let positions = msg.positions();
        assert_eq!(positions.len(), 2);
        assert!(positions
            .iter()
            .all(|p| p.long_qty().is_none() && p.short_qty().is_none()));
        assert_eq!(msg.text(), "exercised");
        assert_eq!(msg.account_type(), Ok(None));
    }
}
