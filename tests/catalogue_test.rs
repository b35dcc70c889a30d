//! Every template at every supported schema version
//!
//! Untuk setiap message: init di versi 3..=5, cek block length di header,
//! isi beberapa field, lalu wrap ulang dan decode lewat `AnyMessage`.
//! Field yang baru ada di versi berikutnya harus `None` dan setter-nya
//! ditolak dengan `DisallowedField` di versi lama.

use b3_boe::core::{Error, SbeMessage, HEADER_SIZE};
use b3_boe::protocol::fix::{fix_field, fix_msg_type};
use b3_boe::protocol::*;

fn inbound() -> InboundBusinessHeader {
    InboundBusinessHeader {
        session_id: 31,
        msg_seq_num: 8,
        sending_time: None,
        market_segment_id: 2,
    }
}

fn outbound() -> OutboundBusinessHeader {
    OutboundBusinessHeader {
        session_id: 31,
        msg_seq_num: 9,
        sending_time: None,
        event_indicator: EventIndicator::default(),
        market_segment_id: Some(2),
    }
}

fn bidirectional() -> BidirectionalBusinessHeader {
    BidirectionalBusinessHeader {
        session_id: 31,
        msg_seq_num: 10,
        sending_time: None,
        event_indicator: EventIndicator::default(),
        market_segment_id: None,
    }
}

macro_rules! catalogue {
    (
        $(
            $test:ident: $ty:ident {
                $( $set:ident ( $value:expr ) => $get:ident == $expected:expr; )*
            }
        )+
    ) => {
        $(
            #[test]
            fn $test() {
                for version in MINIMAL_SCHEMA_VERSION..=SCHEMA_VERSION {
                    let block_length = $ty::<()>::block_length(version);
                    let mut buf = [0u8; 1024];
                    let size = {
                        let mut msg = $ty::with_version(&mut buf[..], version).unwrap();
                        assert_eq!(msg.header().block_length, block_length);
                        assert_eq!(msg.header().template_id, $ty::<()>::TEMPLATE_ID);
                        assert_eq!(msg.version(), version);
                        $( msg.$set($value); )*
                        msg.calculate_binary_size()
                    };
                    assert_eq!(
                        size,
                        HEADER_SIZE
                            + block_length as usize
                            + $ty::<()>::minimal_variable_fields_size()
                    );

                    let msg = $ty::wrap(&buf[..size]).unwrap();
                    assert_eq!(msg.version(), version);
                    $( assert_eq!(msg.$get(), $expected, "{} v{}", stringify!($get), version); )*

                    let any = AnyMessage::decode(SbeMessage::wrap(&buf[..size]).unwrap()).unwrap();
                    assert_eq!(any.template_id(), $ty::<()>::TEMPLATE_ID);
                    assert_eq!(any.class_name(), stringify!($ty));
                    assert_eq!(any.message_type(), $ty::<()>::MESSAGE_TYPE);
                    assert_eq!(any.as_bytes(), &buf[..size]);

                    let mut fix = String::new();
                    any.to_fix(&mut fix);
                    assert_eq!(fix_field(&fix, 35), Some(fix_msg_type($ty::<()>::FIX_TYPE)));
                }

                let mut buf = [0u8; 1024];
                let msg = $ty::new(&mut buf[..]).unwrap();
                assert_eq!(msg.header().block_length, $ty::<()>::block_length(SCHEMA_VERSION));
                assert!(AnyMessage::TEMPLATE_IDS.contains(&$ty::<()>::TEMPLATE_ID));
            }
        )+

        #[test]
        fn test_catalogue_covers_every_template() {
            let mut covered = vec![$( $ty::<()>::TEMPLATE_ID ),+];
            covered.sort_unstable();
            let mut known = AnyMessage::TEMPLATE_IDS.to_vec();
            known.sort_unstable();
            assert_eq!(covered, known);
        }
    };
}

catalogue! {
    test_negotiate: Negotiate1 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
        set_entering_firm(1234) => entering_firm == 1234;
    }
    test_negotiate_response: NegotiateResponse2 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
    }
    test_negotiate_reject: NegotiateReject3 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
        set_negotiation_reject_code(NegotiationRejectCode::Credentials)
            => negotiation_reject_code == Ok(NegotiationRejectCode::Credentials);
    }
    test_establish: Establish4 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
        set_cancel_on_disconnect_type(CancelOnDisconnectType::CancelOnTerminateOnly)
            => cancel_on_disconnect_type == Ok(CancelOnDisconnectType::CancelOnTerminateOnly);
    }
    test_establish_ack: EstablishAck5 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
    }
    test_establish_reject: EstablishReject6 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
        set_establishment_reject_code(EstablishRejectCode::Unnegotiated)
            => establishment_reject_code == Ok(EstablishRejectCode::Unnegotiated);
    }
    test_terminate: Terminate7 {
        set_session_id(31) => session_id == 31;
        set_session_ver_id(2) => session_ver_id == 2;
        set_termination_code(TerminationCode::Finished)
            => termination_code == Ok(TerminationCode::Finished);
    }
    test_not_applied: NotApplied8 {
        set_from_seq_no(100) => from_seq_no == 100;
        set_count(5) => count == 5;
    }
    test_sequence: Sequence9 {
        set_next_seq_no(42) => next_seq_no == 42;
    }
    test_retransmit_request: RetransmitRequest12 {
        set_session_id(31) => session_id == 31;
        set_from_seq_no(100) => from_seq_no == 100;
    }
    test_retransmission: Retransmission13 {
        set_session_id(31) => session_id == 31;
        set_next_seq_no(101) => next_seq_no == 101;
    }
    test_retransmit_reject: RetransmitReject14 {
        set_session_id(31) => session_id == 31;
        set_retransmit_reject_code(RetransmitRejectCode::InvalidSession)
            => retransmit_reject_code == Ok(RetransmitRejectCode::InvalidSession);
    }
    test_simple_new_order: SimpleNewOrder100 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_mm_protection_reset(Boolean::True) => mm_protection_reset == Ok(Boolean::True);
    }
    test_simple_modify_order: SimpleModifyOrder101 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_mm_protection_reset(Boolean::True) => mm_protection_reset == Ok(Boolean::True);
    }
    test_new_order_single: NewOrderSingle102 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_mm_protection_reset(Boolean::False) => mm_protection_reset == Ok(Boolean::False);
    }
    test_order_cancel_replace_request: OrderCancelReplaceRequest104 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_mm_protection_reset(Boolean::True) => mm_protection_reset == Ok(Boolean::True);
    }
    test_order_cancel_request: OrderCancelRequest105 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_side(Side::Sell) => side == Ok(Side::Sell);
    }
    test_new_order_cross: NewOrderCross106 {
        set_business_header(inbound()) => business_header == inbound();
        set_cross_id(88) => cross_id == 88;
        set_security_id(4_000_123) => security_id == 4_000_123;
    }
    test_execution_report_new: ExecutionReportNew200 {
        set_business_header(outbound()) => business_header == outbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_secondary_order_id(70) => secondary_order_id == 70;
        set_side(Side::Buy) => side == Ok(Side::Buy);
    }
    test_execution_report_modify: ExecutionReportModify201 {
        set_business_header(outbound()) => business_header == outbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_secondary_order_id(70) => secondary_order_id == 70;
        set_side(Side::Sell) => side == Ok(Side::Sell);
    }
    test_execution_report_cancel: ExecutionReportCancel202 {
        set_business_header(outbound()) => business_header == outbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_secondary_order_id(70) => secondary_order_id == 70;
        set_side(Side::Buy) => side == Ok(Side::Buy);
    }
    test_execution_report_trade: ExecutionReportTrade203 {
        set_business_header(outbound()) => business_header == outbound();
        set_secondary_order_id(70) => secondary_order_id == 70;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_side(Side::Sell) => side == Ok(Side::Sell);
    }
    test_execution_report_reject: ExecutionReportReject204 {
        set_business_header(outbound()) => business_header == outbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_side(Side::Buy) => side == Ok(Side::Buy);
    }
    test_execution_report_forward: ExecutionReportForward205 {
        set_business_header(outbound()) => business_header == outbound();
        set_secondary_order_id(70) => secondary_order_id == 70;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_side(Side::Sell) => side == Ok(Side::Sell);
    }
    test_business_message_reject: BusinessMessageReject206 {
        set_business_header(outbound()) => business_header == outbound();
        set_ref_seq_num(17) => ref_seq_num == 17;
        set_business_reject_reason(33) => business_reject_reason == 33;
        set_ref_msg_type(MessageType::NewOrderSingle) => ref_msg_type == Ok(MessageType::NewOrderSingle);
    }
    test_security_definition_request: SecurityDefinitionRequest300 {
        set_business_header(inbound()) => business_header == inbound();
        set_security_req_id(55) => security_req_id == 55;
    }
    test_security_definition_response: SecurityDefinitionResponse301 {
        set_business_header(outbound()) => business_header == outbound();
        set_security_req_id(55) => security_req_id == 55;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_security_response_type(SecurityResponseType::RejectSecurityProposal)
            => security_response_type == Ok(SecurityResponseType::RejectSecurityProposal);
    }
    test_quote_request: QuoteRequest401 {
        set_business_header(bidirectional()) => business_header == bidirectional();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_quote_req_id(99) => quote_req_id == 99;
        set_settl_type(SettlType::SellersDiscretion) => settl_type == Ok(SettlType::SellersDiscretion);
    }
    test_quote_status_report: QuoteStatusReport402 {
        set_business_header(bidirectional()) => business_header == bidirectional();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_quote_req_id(99) => quote_req_id == 99;
        set_quote_status(QuoteStatus::Expired) => quote_status == Ok(QuoteStatus::Expired);
    }
    test_quote: Quote403 {
        set_business_header(bidirectional()) => business_header == bidirectional();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_quote_id(12) => quote_id == 12;
        set_settl_type(SettlType::Mutual) => settl_type == Ok(SettlType::Mutual);
    }
    test_quote_cancel: QuoteCancel404 {
        set_business_header(bidirectional()) => business_header == bidirectional();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_quote_req_id(99) => quote_req_id == 99;
    }
    test_quote_request_reject: QuoteRequestReject405 {
        set_business_header(bidirectional()) => business_header == bidirectional();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_quote_req_id(99) => quote_req_id == 99;
    }
    test_position_maintenance_cancel_request: PositionMaintenanceCancelRequest501 {
        set_business_header(inbound()) => business_header == inbound();
        set_pos_req_id(61) => pos_req_id == 61;
        set_security_id(4_000_123) => security_id == 4_000_123;
    }
    test_position_maintenance_request: PositionMaintenanceRequest502 {
        set_business_header(inbound()) => business_header == inbound();
        set_pos_req_id(61) => pos_req_id == 61;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_pos_trans_type(PosTransType::AutomaticExercise)
            => pos_trans_type == Ok(PosTransType::AutomaticExercise);
    }
    test_position_maintenance_report: PositionMaintenanceReport503 {
        set_business_header(outbound()) => business_header == outbound();
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_pos_maint_rpt_id(62) => pos_maint_rpt_id == 62;
        set_pos_trans_type(PosTransType::Exercise) => pos_trans_type == Ok(PosTransType::Exercise);
    }
    test_allocation_instruction: AllocationInstruction601 {
        set_business_header(inbound()) => business_header == inbound();
        set_alloc_id(5) => alloc_id == 5;
        set_security_id(4_000_123) => security_id == 4_000_123;
        set_alloc_trans_type(AllocTransType::Cancel) => alloc_trans_type == Ok(AllocTransType::Cancel);
    }
    test_allocation_report: AllocationReport602 {
        set_business_header(outbound()) => business_header == outbound();
        set_alloc_report_id(6) => alloc_report_id == 6;
        set_alloc_id(5) => alloc_id == 5;
        set_alloc_trans_type(AllocTransType::New) => alloc_trans_type == Ok(AllocTransType::New);
    }
    test_order_mass_action_request: OrderMassActionRequest701 {
        set_business_header(inbound()) => business_header == inbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_mass_action_type(MassActionType::CancelOrders)
            => mass_action_type == Ok(MassActionType::CancelOrders);
    }
    test_order_mass_action_report: OrderMassActionReport702 {
        set_business_header(outbound()) => business_header == outbound();
        set_cl_ord_id(7) => cl_ord_id == 7;
        set_mass_action_report_id(8) => mass_action_report_id == 8;
        set_mass_action_type(MassActionType::CancelAndSuspendOrders)
            => mass_action_type == Ok(MassActionType::CancelAndSuspendOrders);
    }
}

macro_rules! versioned_fields {
    (
        $(
            $test:ident: $ty:ident {
                $( $get:ident, $set:ident = $value:literal, tag $tag:literal, since $since:literal; )+
            }
        )+
    ) => {
        $(
            #[test]
            fn $test() {
                for version in MINIMAL_SCHEMA_VERSION..=SCHEMA_VERSION {
                    let mut buf = [0u8; 1024];
                    let size = {
                        let mut msg = $ty::with_version(&mut buf[..], version).unwrap();
                        $(
                            assert_eq!(msg.$get(), None);
                            let result = msg.$set(Some($value)).map(|_| ());
                            if version < $since {
                                assert_eq!(
                                    result,
                                    Err(Error::DisallowedField {
                                        field: stringify!($get),
                                        since: $since,
                                        version,
                                    })
                                );
                                assert!(msg.$set(None).is_err());
                            } else {
                                assert_eq!(result, Ok(()));
                            }
                        )+
                        msg.calculate_binary_size()
                    };

                    let msg = $ty::wrap(&buf[..size]).unwrap();
                    let mut fix = String::new();
                    msg.to_fix(&mut fix);
                    $(
                        if version < $since {
                            assert_eq!(msg.$get(), None, "{} v{}", stringify!($get), version);
                            assert_eq!(fix_field(&fix, $tag), None);
                        } else {
                            assert_eq!(msg.$get(), Some($value), "{} v{}", stringify!($get), version);
                            let text = ($value).to_string();
                            assert_eq!(fix_field(&fix, $tag), Some(text.as_str()));
                        }
                    )+
                }
            }
        )+
    };
}

versioned_fields! {
    test_new_order_single_versioned_fields: NewOrderSingle102 {
        trading_sub_account, set_trading_sub_account = 4_001, tag 35010, since 4;
        strategy_id, set_strategy_id = -17, tag 35011, since 5;
    }
    test_order_cancel_replace_versioned_fields: OrderCancelReplaceRequest104 {
        trading_sub_account, set_trading_sub_account = 4_002, tag 35010, since 4;
        strategy_id, set_strategy_id = 18, tag 35011, since 5;
    }
    test_execution_report_new_versioned_fields: ExecutionReportNew200 {
        trading_sub_account, set_trading_sub_account = 4_003, tag 35010, since 4;
        strategy_id, set_strategy_id = 19, tag 35011, since 5;
    }
    test_execution_report_modify_versioned_fields: ExecutionReportModify201 {
        trading_sub_account, set_trading_sub_account = 4_004, tag 35010, since 4;
        strategy_id, set_strategy_id = 20, tag 35011, since 5;
    }
    test_execution_report_cancel_versioned_fields: ExecutionReportCancel202 {
        trading_sub_account, set_trading_sub_account = 4_005, tag 35010, since 4;
        strategy_id, set_strategy_id = -21, tag 35011, since 5;
    }
    test_execution_report_trade_versioned_fields: ExecutionReportTrade203 {
        strategy_id, set_strategy_id = 22, tag 35011, since 5;
    }
    test_execution_report_reject_versioned_fields: ExecutionReportReject204 {
        trading_sub_account, set_trading_sub_account = 4_006, tag 35010, since 4;
        strategy_id, set_strategy_id = 23, tag 35011, since 5;
    }
}

#[test]
fn test_versioned_block_lengths() {
    let expected: [(u16, [u16; 3]); 7] = [
        (NewOrderSingle102::<()>::TEMPLATE_ID, [127, 131, 135]),
        (OrderCancelReplaceRequest104::<()>::TEMPLATE_ID, [144, 148, 152]),
        (ExecutionReportNew200::<()>::TEMPLATE_ID, [164, 168, 172]),
        (ExecutionReportModify201::<()>::TEMPLATE_ID, [178, 182, 186]),
        (ExecutionReportCancel202::<()>::TEMPLATE_ID, [170, 174, 178]),
        (ExecutionReportTrade203::<()>::TEMPLATE_ID, [159, 159, 163]),
        (ExecutionReportReject204::<()>::TEMPLATE_ID, [166, 170, 174]),
    ];
    let actual = |version| {
        [
            NewOrderSingle102::<()>::block_length(version),
            OrderCancelReplaceRequest104::<()>::block_length(version),
            ExecutionReportNew200::<()>::block_length(version),
            ExecutionReportModify201::<()>::block_length(version),
            ExecutionReportCancel202::<()>::block_length(version),
            ExecutionReportTrade203::<()>::block_length(version),
            ExecutionReportReject204::<()>::block_length(version),
        ]
    };
    for (i, version) in (MINIMAL_SCHEMA_VERSION..=SCHEMA_VERSION).enumerate() {
        let lengths = actual(version);
        for (j, (template_id, by_version)) in expected.iter().enumerate() {
            assert_eq!(lengths[j], by_version[i], "template {template_id} v{version}");
        }
    }
}
