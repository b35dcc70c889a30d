//! User defined instrument (strategy) creation

use crate::core::RatioQty;
use crate::protocol::composites::{InboundBusinessHeader, OutboundBusinessHeader};
use crate::protocol::fields::{MessageType, SecurityResponseType, Side};

sbe_group_entry! {
    /// One leg of a user defined strategy.
    pub struct SecurityDefinitionLegsEntry {
        block_length: 29,
        fields: {
            leg_symbol, set_leg_symbol: fixed_str(20) @ 0 tag 600;
            leg_ratio_qty, set_leg_ratio_qty: ordinary(RatioQty) @ 20 tag 623;
            leg_side, set_leg_side: enumeration(Side) @ 28 tag 624;
        },
    }
}

sbe_message! {
    pub struct SecurityDefinitionRequest300 {
        template_id: 300,
        message_type: MessageType::SecurityDefinitionRequest,
        fix_type: "SecurityDefinitionRequest",
        block_length: 41,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            security_req_id, set_security_req_id: ordinary(u64) @ 18 tag 320;
            sender_location, set_sender_location: fixed_str(10) @ 26 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 36 tag 35004;
        },
        groups: {
            legs, setup_legs, legs_mut: SecurityDefinitionLegsEntry tag 555;
        },
        data: {},
    }
}

sbe_message! {
    pub struct SecurityDefinitionResponse301 {
        template_id: 301,
        message_type: MessageType::SecurityDefinitionResponse,
        fix_type: "SecurityDefinition",
        block_length: 81,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            security_req_id, set_security_req_id: ordinary(u64) @ 18 tag 320;
            /// Id of the created instrument, zero when rejected.
            security_id, set_security_id: ordinary(u64) @ 26 tag 48;
            security_response_type, set_security_response_type: enumeration(SecurityResponseType) @ 34 tag 323;
            sender_location, set_sender_location: fixed_str(10) @ 35 tag 35003;
            entering_trader, set_entering_trader: fixed_str(5) @ 45 tag 35004;
            security_response_id, set_security_response_id: ordinary(u64) @ 50 tag 322;
            security_strategy_type, set_security_strategy_type: fixed_str(3) @ 58 tag 35015;
            symbol, set_symbol: fixed_str(20) @ 61 tag 55;
        },
        groups: {},
        data: {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, GROUP_SIZE_ENCODING_SIZE, HEADER_SIZE};

    #[test]
    fn test_strategy_legs() {
        let mut buf = [0u8; 256];
        let mut msg = SecurityDefinitionRequest300::new(&mut buf[..]).unwrap();
        msg.set_security_req_id(5)
            .set_sender_location("SAO")
            .unwrap();

        let mut iter = msg.setup_legs(2).unwrap().into_iter();
        let mut first = iter.next().unwrap();
        first
            .set_leg_symbol("PETR4")
            .unwrap()
            .set_leg_ratio_qty(RatioQty::from_units(1).unwrap())
            .set_leg_side(Side::Buy);
        let mut second = iter.next().unwrap();
        second
            .set_leg_symbol("VALE3")
            .unwrap()
            .set_leg_side(Side::Sell);
        drop(iter);

        let size = msg.calculate_binary_size();
        assert_eq!(size, HEADER_SIZE + 41 + GROUP_SIZE_ENCODING_SIZE + 2 * 29);

        let decoded = SecurityDefinitionRequest300::wrap(&buf[..size]).unwrap();
        assert_eq!(decoded.sender_location(), "SAO");
        let symbols: Vec<String> = decoded
            .legs()
            .iter()
            .map(|leg| leg.leg_symbol().to_string())
            .collect();
        assert_eq!(symbols, ["PETR4", "VALE3"]);
        assert_eq!(decoded.legs().get(1).unwrap().leg_side(), Ok(Side::Sell));
    }

    #[test]
    fn test_symbol_too_long() {
        let mut buf = [0u8; 128];
        let mut msg = SecurityDefinitionResponse301::new(&mut buf[..]).unwrap();
        assert!(matches!(
            msg.set_security_strategy_type("ABCD"),
            Err(Error::ValueTooLong { field: "security_strategy_type", .. })
        ));
        msg.set_security_strategy_type("FUT").unwrap();
        assert_eq!(msg.security_strategy_type(), "FUT");
    }
}
