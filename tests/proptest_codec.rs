//! Property-based tests untuk codec
//!
//! - Field dan tail tetap utuh apa pun urutan setter-nya
//! - Input acak tidak pernah membuat decoder panic

use proptest::prelude::*;
use rust_decimal::Decimal;

use b3_boe::core::{Price, Price8, SbeMessage};
use b3_boe::protocol::log::decode_log_line;
use b3_boe::protocol::{
    AnyMessage, FrameBuffer, FrameDecoder, MessageHolder, NewOrderCross106, Side,
    DEFAULT_MAX_GROUP_ITEMS,
};

fn ascii(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{max}}}")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn cross_tail_survives_any_setter_order(
        desk in ascii(20),
        memo in ascii(40),
        sides in 0..=DEFAULT_MAX_GROUP_ITEMS,
        groups_first in any::<bool>(),
        cl_ord_ids in proptest::collection::vec(any::<u64>(), DEFAULT_MAX_GROUP_ITEMS as usize),
    ) {
        let mut holder = MessageHolder::<NewOrderCross106<FrameBuffer>>::new().unwrap();
        if groups_first {
            holder.setup_sides(sides).unwrap();
        }
        holder.set_desk_id(&desk).unwrap();
        holder.set_memo(&memo).unwrap();
        if !groups_first {
            holder.setup_sides(sides).unwrap();
        }
        for (i, mut entry) in holder.sides_mut().into_iter().enumerate() {
            entry.set_side(Side::Sell).set_cl_ord_id(cl_ord_ids[i]);
        }

        let frame = holder.to_network_message().unwrap();
        let decoded = NewOrderCross106::wrap(frame.payload()).unwrap();
        prop_assert_eq!(decoded.desk_id(), desk.as_str());
        prop_assert_eq!(decoded.memo(), memo.as_str());
        prop_assert_eq!(decoded.sides().len(), sides as usize);
        for (i, entry) in decoded.sides().iter().enumerate() {
            prop_assert_eq!(entry.cl_ord_id(), cl_ord_ids[i]);
            prop_assert_eq!(entry.side(), Ok(Side::Sell));
        }
    }

    #[test]
    fn price_decimal_roundtrip(mantissa in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let price = Price::from_mantissa(mantissa);
        prop_assert_eq!(Price::from_decimal(price.to_decimal()), Ok(price));

        let decimal = Decimal::new(mantissa, 8);
        prop_assert_eq!(Price8::from_decimal(decimal).map(|p| p.mantissa()), Ok(mantissa));
    }
}

proptest! {
    #[test]
    fn random_message_does_not_panic(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
        if let Ok(msg) = SbeMessage::wrap(payload.as_slice()) {
            if let Ok(typed) = AnyMessage::decode(msg) {
                let _ = format!("{typed:?}");
                prop_assert!(typed.as_bytes().len() <= payload.len());
            }
        }
    }

    #[test]
    fn random_stream_does_not_panic(payload in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut decoder = FrameDecoder::new(&payload);
        let mut consumed = 0;
        for frame in decoder.by_ref() {
            match frame {
                Ok(frame) => consumed += frame.len(),
                Err(_) => break,
            }
        }
        prop_assert_eq!(consumed + decoder.remaining().len(), payload.len());
    }

    #[test]
    fn random_log_line_does_not_panic(line in "\\PC{0,200}") {
        let _ = decode_log_line(&line).and_then(|record| record.render());
    }
}
