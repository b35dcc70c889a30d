//! FIX tag=value rendering of encoded messages
//!
//! Output dibandingkan dengan SOH diganti `|` supaya mudah dibaca.

use b3_boe::core::{Price, SbeMessage, UtcTimestampNanos};
use b3_boe::protocol::fix::{fix_field, SOH};
use b3_boe::protocol::{
    AnyMessage, CrossedIndicator, InboundBusinessHeader, Negotiate1, NewOrderCross106,
    QuoteRequest401, SettlType, Side, SimpleNewOrder100, SimpleOrdType, SimpleTimeInForce,
};

fn readable(fix: &str) -> String {
    fix.replace(SOH, "|")
}

fn inbound_header(msg_seq_num: u32) -> InboundBusinessHeader {
    InboundBusinessHeader {
        session_id: 7,
        msg_seq_num,
        sending_time: None,
        market_segment_id: 1,
    }
}

#[test]
fn test_simple_new_order_fix() {
    let mut buf = [0u8; 256];
    let mut msg = SimpleNewOrder100::new(&mut buf[..]).unwrap();
    msg.set_business_header(inbound_header(12))
        .set_cl_ord_id(1)
        .set_account(Some(500))
        .set_security_id(4_000_123)
        .set_side(Side::Buy)
        .set_ord_type(SimpleOrdType::Limit)
        .set_time_in_force(SimpleTimeInForce::Day)
        .set_order_qty(100)
        .set_price(Some(Price::from_mantissa(12_3400)));
    msg.set_entering_trader("TRD01").unwrap();
    msg.set_memo("hi").unwrap();

    let mut fix = String::new();
    msg.to_fix(&mut fix);
    assert_eq!(
        readable(&fix),
        "35=D|35524=7|34=12|1300=1|35002=0|11=1|1=500|35004=TRD01|2964=0|48=4000123|\
         54=1|40=2|59=0|38=100|44=12.3400|5149=hi|"
    );
}

#[test]
fn test_cross_order_group_fix() {
    let mut buf = [0u8; 512];
    let mut msg = NewOrderCross106::new(&mut buf[..]).unwrap();
    msg.set_business_header(inbound_header(3))
        .set_cross_id(77)
        .set_security_id(11)
        .set_order_qty(300)
        .set_price(Price::from_units(10).unwrap())
        .set_crossed_indicator(Some(CrossedIndicator::TwapVwap));
    let sides = msg.setup_sides(2).unwrap();
    for (i, mut side) in sides.into_iter().enumerate() {
        side.set_side(if i == 0 { Side::Buy } else { Side::Sell })
            .set_account(Some(10 * (i as u32 + 1)))
            .set_cl_ord_id(501 + i as u64);
    }
    msg.set_desk_id("DESK").unwrap();

    let mut fix = String::new();
    msg.to_fix(&mut fix);
    let fix = readable(&fix);

    assert!(fix.starts_with("35=s|35524=7|34=3|"), "{fix}");
    assert!(fix.contains("|44=10.0000|2523=1003|"), "{fix}");
    // Null cross_type dan cross_prioritization tidak ditulis
    assert!(!fix.contains("|549="), "{fix}");
    assert!(!fix.contains("|550="), "{fix}");
    assert!(
        fix.ends_with("|552=2|54=1|1=10|11=501|54=2|1=20|11=502|284=DESK|"),
        "{fix}"
    );
}

#[test]
fn test_empty_group_is_left_out() {
    let mut buf = [0u8; 256];
    let mut msg = QuoteRequest401::with_version(&mut buf[..], 3).unwrap();
    msg.set_quote_req_id(99)
        .set_settl_type(SettlType::Mutual)
        .set_transact_time(UtcTimestampNanos(1_000_000_000));

    let mut fix = String::new();
    msg.to_fix(&mut fix);

    assert_eq!(fix_field(&fix, 35), Some("R"));
    assert_eq!(fix_field(&fix, 131), Some("99"));
    assert_eq!(fix_field(&fix, 63), Some("X"));
    assert_eq!(fix_field(&fix, 60), Some("19700101-00:00:01.000000000"));
    assert_eq!(fix_field(&fix, 44), None);
    assert_eq!(fix_field(&fix, 552), None);
}

#[test]
fn test_session_message_fix() {
    let mut buf = [0u8; 512];
    let size = {
        let mut msg = Negotiate1::new(&mut buf[..]).unwrap();
        msg.set_session_id(5)
            .set_session_ver_id(2)
            .set_timestamp(UtcTimestampNanos(0))
            .set_entering_firm(1234);
        msg.set_credentials("secret").unwrap();
        msg.set_client_app_name("trader").unwrap();
        msg.calculate_binary_size()
    };

    let decoded = AnyMessage::decode(SbeMessage::wrap(&buf[..size]).unwrap()).unwrap();
    let mut fix = String::new();
    decoded.to_fix(&mut fix);

    assert_eq!(
        readable(&fix),
        "35=Negotiate|35524=5|35525=2|35526=19700101-00:00:00.000000000|35016=1234|\
         35550=secret|35552=trader|"
    );
}
