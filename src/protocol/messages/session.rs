//! Session layer (FIXP) messages

use crate::core::{DeltaInMillis, UtcTimestampNanos};
use crate::protocol::composites::{ClientAppEncoding, CredentialsEncoding, Version};
use crate::protocol::fields::{
    CancelOnDisconnectType, EstablishRejectCode, MessageType, NegotiationRejectCode,
    RetransmitRejectCode, TerminationCode,
};

sbe_message! {
    /// Starts a session: identifies the client and carries its credentials.
    pub struct Negotiate1 {
        template_id: 1,
        message_type: MessageType::Negotiate,
        fix_type: "Negotiate",
        block_length: 28,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            /// Incremented by the client on every new negotiation.
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            timestamp, set_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35526;
            entering_firm, set_entering_firm: ordinary(u32) @ 20 tag 35016;
            onbehalf_firm, set_onbehalf_firm: optional(u32 = 0) @ 24 tag 35017;
        },
        groups: {},
        data: {
            credentials, set_credentials: CredentialsEncoding tag 35550;
            client_ip, set_client_ip: ClientAppEncoding tag 35551;
            client_app_name, set_client_app_name: ClientAppEncoding tag 35552;
            client_app_version, set_client_app_version: ClientAppEncoding tag 35553;
        },
    }
}

sbe_message! {
    pub struct NegotiateResponse2 {
        template_id: 2,
        message_type: MessageType::NegotiateResponse,
        fix_type: "NegotiateResponse",
        block_length: 28,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35527;
            entering_firm, set_entering_firm: ordinary(u32) @ 20 tag 35016;
            semantic_version, set_semantic_version: optional_composite(Version) @ 24;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct NegotiateReject3 {
        template_id: 3,
        message_type: MessageType::NegotiateReject,
        fix_type: "NegotiateReject",
        block_length: 36,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35527;
            entering_firm, set_entering_firm: optional(u32 = 0) @ 20 tag 35016;
            negotiation_reject_code, set_negotiation_reject_code: enumeration(NegotiationRejectCode) @ 24 tag 35535;
            /// Session version currently active, when `AlreadyNegotiated`.
            current_session_ver_id, set_current_session_ver_id: optional(u64 = 0) @ 28 tag 35536;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    /// Binds the negotiated session to the connection.
    pub struct Establish4 {
        template_id: 4,
        message_type: MessageType::Establish,
        fix_type: "Establish",
        block_length: 42,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            timestamp, set_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35526;
            keep_alive_interval, set_keep_alive_interval: ordinary(DeltaInMillis) @ 20 tag 35528;
            next_seq_no, set_next_seq_no: ordinary(u32) @ 28 tag 35529;
            cancel_on_disconnect_type, set_cancel_on_disconnect_type: enumeration(CancelOnDisconnectType) @ 32 tag 35533;
            cod_timeout_window, set_cod_timeout_window: ordinary(DeltaInMillis) @ 34 tag 35534;
        },
        groups: {},
        data: {
            credentials, set_credentials: CredentialsEncoding tag 35550;
        },
    }
}

sbe_message! {
    pub struct EstablishAck5 {
        template_id: 5,
        message_type: MessageType::EstablishAck,
        fix_type: "EstablishAck",
        block_length: 40,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35527;
            keep_alive_interval, set_keep_alive_interval: ordinary(DeltaInMillis) @ 20 tag 35528;
            next_seq_no, set_next_seq_no: ordinary(u32) @ 28 tag 35529;
            last_incoming_seq_no, set_last_incoming_seq_no: ordinary(u32) @ 32 tag 35538;
            semantic_version, set_semantic_version: optional_composite(Version) @ 36;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct EstablishReject6 {
        template_id: 6,
        message_type: MessageType::EstablishReject,
        fix_type: "EstablishReject",
        block_length: 26,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 12 tag 35527;
            establishment_reject_code, set_establishment_reject_code: enumeration(EstablishRejectCode) @ 20 tag 35537;
            last_incoming_seq_no, set_last_incoming_seq_no: optional(u32 = 0) @ 22 tag 35538;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct Terminate7 {
        template_id: 7,
        message_type: MessageType::Terminate,
        fix_type: "Terminate",
        block_length: 13,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            session_ver_id, set_session_ver_id: ordinary(u64) @ 4 tag 35525;
            termination_code, set_termination_code: enumeration(TerminationCode) @ 12 tag 35539;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    /// Messages `from_seq_no..from_seq_no + count` were not applied.
    pub struct NotApplied8 {
        template_id: 8,
        message_type: MessageType::NotApplied,
        fix_type: "NotApplied",
        block_length: 8,
        fields: {
            from_seq_no, set_from_seq_no: ordinary(u32) @ 0 tag 35544;
            count, set_count: ordinary(u32) @ 4 tag 35545;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    /// Heartbeat carrying the next expected sequence number.
    pub struct Sequence9 {
        template_id: 9,
        message_type: MessageType::Sequence,
        fix_type: "Sequence",
        block_length: 4,
        fields: {
            next_seq_no, set_next_seq_no: ordinary(u32) @ 0 tag 35529;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct RetransmitRequest12 {
        template_id: 12,
        message_type: MessageType::RetransmitRequest,
        fix_type: "RetransmitRequest",
        block_length: 20,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            timestamp, set_timestamp: ordinary(UtcTimestampNanos) @ 4 tag 35526;
            from_seq_no, set_from_seq_no: ordinary(u32) @ 12 tag 35544;
            count, set_count: ordinary(u32) @ 16 tag 35545;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct Retransmission13 {
        template_id: 13,
        message_type: MessageType::Retransmission,
        fix_type: "Retransmission",
        block_length: 20,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 4 tag 35527;
            next_seq_no, set_next_seq_no: ordinary(u32) @ 12 tag 35529;
            count, set_count: ordinary(u32) @ 16 tag 35545;
        },
        groups: {},
        data: {},
    }
}

sbe_message! {
    pub struct RetransmitReject14 {
        template_id: 14,
        message_type: MessageType::RetransmitReject,
        fix_type: "RetransmitReject",
        block_length: 13,
        fields: {
            session_id, set_session_id: ordinary(u32) @ 0 tag 35524;
            request_timestamp, set_request_timestamp: ordinary(UtcTimestampNanos) @ 4 tag 35527;
            retransmit_reject_code, set_retransmit_reject_code: enumeration(RetransmitRejectCode) @ 12 tag 35546;
        },
        groups: {},
        data: {},
    }
}
