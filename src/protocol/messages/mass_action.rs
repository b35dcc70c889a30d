//! Order mass action (mass cancel)

use crate::core::UtcTimestampNanos;
use crate::protocol::composites::{InboundBusinessHeader, OutboundBusinessHeader, TextEncoding};
use crate::protocol::fields::{
    ExecRestatementReasonValidForMassCancel, MassActionRejectReason, MassActionResponse,
    MassActionScope, MassActionType, MessageType, Side,
};

sbe_message! {
    pub struct OrderMassActionRequest701 {
        template_id: 701,
        message_type: MessageType::OrderMassActionRequest,
        fix_type: "OrderMassActionRequest",
        block_length: 46,
        fields: {
            business_header, set_business_header: composite(InboundBusinessHeader) @ 0;
            mass_action_type, set_mass_action_type: enumeration(MassActionType) @ 18 tag 1373;
            mass_action_scope, set_mass_action_scope: optional_enum(MassActionScope = 0) @ 19 tag 1374;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            exec_restatement_reason, set_exec_restatement_reason: optional_enum(ExecRestatementReasonValidForMassCancel = 0) @ 28 tag 378;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 29 tag 35001;
            side, set_side: optional_enum(Side = 0) @ 30 tag 54;
            /// Restricts the action to one asset (e.g. `PETR`).
            asset, set_asset: fixed_str(6) @ 32 tag 35014;
            security_id, set_security_id: optional(u64 = 0) @ 38 tag 48;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct OrderMassActionReport702 {
        template_id: 702,
        message_type: MessageType::OrderMassActionReport,
        fix_type: "OrderMassActionReport",
        block_length: 64,
        fields: {
            business_header, set_business_header: composite(OutboundBusinessHeader) @ 0;
            mass_action_type, set_mass_action_type: enumeration(MassActionType) @ 18 tag 1373;
            mass_action_scope, set_mass_action_scope: optional_enum(MassActionScope = 0) @ 19 tag 1374;
            cl_ord_id, set_cl_ord_id: ordinary(u64) @ 20 tag 11;
            mass_action_report_id, set_mass_action_report_id: ordinary(u64) @ 28 tag 1369;
            transact_time, set_transact_time: ordinary(UtcTimestampNanos) @ 36 tag 60;
            mass_action_response, set_mass_action_response: enumeration(MassActionResponse) @ 44 tag 1375;
            mass_action_reject_reason, set_mass_action_reject_reason: optional_enum(MassActionRejectReason = 255) @ 45 tag 1376;
            exec_restatement_reason, set_exec_restatement_reason: optional_enum(ExecRestatementReasonValidForMassCancel = 0) @ 46 tag 378;
            ord_tag_id, set_ord_tag_id: optional(u8 = 0) @ 47 tag 35001;
            side, set_side: optional_enum(Side = 0) @ 48 tag 54;
            asset, set_asset: fixed_str(6) @ 50 tag 35014;
            security_id, set_security_id: optional(u64 = 0) @ 56 tag 48;
        },
        groups: {},
        data: {
            text, set_text: TextEncoding tag 58;
        },
    }
}
