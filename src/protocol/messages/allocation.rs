//! Allocation (give-up) messages

use crate::core::{LocalMktDate, UtcTimestampNanos};
use crate::protocol::composites::{InboundBusinessHeader, OutboundBusinessHeader};
use crate::protocol::fields::{
    AllocNoOrdersType, AllocReportType, AllocStatus, AllocTransType, AllocType, MessageType,
};

sbe_message! {
    pub struct AllocationInstruction601 {
        template_id: 601,
        message_type: MessageType::AllocationInstruction,
        fix_type: "AllocationInstruction",
        block_length: 64,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            alloc_id, set_alloc_id: ordinary(u64) @ 18 tag 70;
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            alloc_trans_type, set_alloc_trans_type: enumeration(AllocTransType) @ 34 tag 71;
            alloc_type, set_alloc_type: enumeration(AllocType) @ 35 tag 626;
            alloc_no_orders_type, set_alloc_no_orders_type: enumeration(AllocNoOrdersType) @ 36 tag 857;
            quantity, set_quantity: ordinary(u64) @ 37 tag 53;
            sender_location, set_sender_location: fixed_str(10) @ 45 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 55 tag 35004;
            /// Account receiving the allocation.
            alloc_account, set_alloc_account: ordinary(u32) @ 60 tag 79;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct AllocationReport602 {
        template_id: 602,
        message_type: MessageType::AllocationReport,
        fix_type: "AllocationReport",
        block_length: 68,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            alloc_report_id, set_alloc_report_id: ordinary(u64) @ 18 tag 755;
            alloc_id, set_alloc_id: ordinary(u64) @ 26 tag 70;
            security_id, set_security_id: ordinary(u64) @ 34 tag 48;
            alloc_trans_type, set_alloc_trans_type: enumeration(AllocTransType) @ 42 tag 71;
            alloc_report_type, set_alloc_report_type: enumeration(AllocReportType) @ 43 tag 794;
            alloc_no_orders_type, set_alloc_no_orders_type: enumeration(AllocNoOrdersType) @ 44 tag 857;
            alloc_rej_code, set_alloc_rej_code: optional(u32 = 0) @ 45 tag 88;
            quantity, set_quantity: ordinary(u64) @ 49 tag 53;
            alloc_status, set_alloc_status: enumeration(AllocStatus) @ 57 tag 87;
            trade_date, set_trade_date: optional(LocalMktDate = LocalMktDate::NULL) @ 58 tag 75;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 60 tag 60;
        },
        groups: {},
        data: {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, HEADER_SIZE};

    #[test]
    fn test_allocation_instruction() {
        let mut buf = [0u8; 128];
        let mut msg = AllocationInstruction601::new(&mut buf[..]).unwrap();
        msg.set_alloc_id(1)
            .set_alloc_trans_type(AllocTransType::New)
            .set_alloc_type(AllocType::RequestToIntermediary)
            .set_alloc_no_orders_type(AllocNoOrdersType::NotSpecified)
            .set_quantity(100)
            .set_alloc_account(321);

        assert_eq!(msg.calculate_binary_size(), HEADER_SIZE + 64);
        assert_eq!(buf[HEADER_SIZE + 34], b'0');
        assert_eq!(buf[HEADER_SIZE + 35], b'8');
    }

    #[test]
    fn test_report_rejects_unknown_status() {
        let mut buf = [0u8; 128];
        AllocationReport602::new(&mut buf[..])
            .unwrap()
            .set_alloc_status(AllocStatus::Accepted);
        buf[HEADER_SIZE + 57] = b'Z';

        let msg = AllocationReport602::wrap(&buf[..]).unwrap();
        assert_eq!(
            msg.alloc_status(),
            Err(Error::InvalidEnumValue {
                type_name: "AllocStatus",
                value: u64::from(b'Z'),
            })
        );
        assert_eq!(msg.alloc_rej_code(), None);
    }
}
