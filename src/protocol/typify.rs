//! Typed dispatch of untyped messages
//!
//! `AnyMessage` memetakan template id ke flyweight yang sesuai. Template
//! yang tidak dikenal tidak dianggap fatal oleh `process_typified`.

use crate::core::{Error, Result, SbeMessage, TemplateId};

use super::messages::*;

macro_rules! any_message {
    ($( $variant:ident ),+ $(,)?) => {
        /// Any BOE message, decoded by template id.
        pub enum AnyMessage<'a> {
            $( $variant($variant<&'a [u8]>), )+
        }

        impl<'a> AnyMessage<'a> {
            /// Template ids with a typed flyweight.
            pub const TEMPLATE_IDS: &'static [TemplateId] = &[
                $( $variant::<()>::TEMPLATE_ID, )+
            ];

            /// Wraps `msg` into its typed flyweight, validating the layout.
            pub fn decode(msg: SbeMessage<&'a [u8]>) -> Result<Self> {
                match msg.template_id() {
                    $( $variant::<()>::TEMPLATE_ID => Ok(Self::$variant($variant::from_sbe(msg)?)), )+
                    template_id => Err(Error::UnknownTemplate { template_id }),
                }
            }

            pub fn template_id(&self) -> TemplateId {
                match self {
                    $( Self::$variant(_) => $variant::<()>::TEMPLATE_ID, )+
                }
            }

            pub fn class_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $variant::<()>::CLASS_NAME, )+
                }
            }

            pub fn message_type(&self) -> super::MessageType {
                match self {
                    $( Self::$variant(_) => $variant::<()>::MESSAGE_TYPE, )+
                }
            }

            /// FIX tag=value rendering of the message.
            pub fn to_fix(&self, out: &mut String) {
                match self {
                    $( Self::$variant(msg) => msg.to_fix(out), )+
                }
            }

            /// The encoded bytes of the message.
            pub fn as_bytes(&self) -> &'a [u8] {
                match self {
                    $( Self::$variant(msg) => {
                        let bytes: &'a [u8] = *msg.sbe().inner();
                        &bytes[..msg.calculate_binary_size()]
                    } )+
                }
            }
        }

        impl std::fmt::Debug for AnyMessage<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( Self::$variant(msg) => std::fmt::Debug::fmt(msg, f), )+
                }
            }
        }
    };
}

any_message! {
    Negotiate1,
    NegotiateResponse2,
    NegotiateReject3,
    Establish4,
    EstablishAck5,
    EstablishReject6,
    Terminate7,
    NotApplied8,
    Sequence9,
    RetransmitRequest12,
    Retransmission13,
    RetransmitReject14,
    SimpleNewOrder100,
    SimpleModifyOrder101,
    NewOrderSingle102,
    OrderCancelReplaceRequest104,
    OrderCancelRequest105,
    NewOrderCross106,
    ExecutionReportNew200,
    ExecutionReportModify201,
    ExecutionReportCancel202,
    ExecutionReportTrade203,
    ExecutionReportReject204,
    ExecutionReportForward205,
    BusinessMessageReject206,
    SecurityDefinitionRequest300,
    SecurityDefinitionResponse301,
    QuoteRequest401,
    QuoteStatusReport402,
    Quote403,
    QuoteCancel404,
    QuoteRequestReject405,
    PositionMaintenanceCancelRequest501,
    PositionMaintenanceRequest502,
    PositionMaintenanceReport503,
    AllocationInstruction601,
    AllocationReport602,
    OrderMassActionRequest701,
    OrderMassActionReport702,
}

/// Decodes `msg` and hands the typed message to `process`.
///
/// Returns `Ok(false)` when the template id has no typed flyweight. Layout
/// errors of known templates are returned as errors.
pub fn process_typified<'a, F>(msg: SbeMessage<&'a [u8]>, process: F) -> Result<bool>
where
    F: FnOnce(AnyMessage<'a>),
{
    match AnyMessage::decode(msg) {
        Ok(typed) => {
            process(typed);
            Ok(true)
        }
        Err(Error::UnknownTemplate { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}
