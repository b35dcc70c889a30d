//! BOE message catalogue
//!
//! Satu flyweight per template, dikelompokkan per business flow.

mod allocation;
mod execution;
mod mass_action;
mod order;
mod position;
mod quote;
mod security;
mod session;

pub use allocation::{AllocationInstruction601, AllocationReport602};
pub use execution::{
    BusinessMessageReject206, ExecutionReportCancel202, ExecutionReportForward205,
    ExecutionReportModify201, ExecutionReportNew200, ExecutionReportReject204,
    ExecutionReportTrade203,
};
pub use mass_action::{OrderMassActionReport702, OrderMassActionRequest701};
pub use order::{
    NewOrderCross106, NewOrderCrossSidesEntry, NewOrderSingle102, OrderCancelReplaceRequest104,
    OrderCancelRequest105, SimpleModifyOrder101, SimpleNewOrder100, SECURITY_EXCHANGE,
    SECURITY_ID_SOURCE,
};
pub use position::{
    PositionMaintenanceCancelRequest501, PositionMaintenanceReport503,
    PositionMaintenanceReportPositionsEntry, PositionMaintenanceRequest502,
    PositionMaintenanceRequestPositionsEntry,
};
pub use quote::{
    Quote403, QuoteCancel404, QuoteRequest401, QuoteRequestReject405, QuoteRequestSidesEntry,
    QuoteStatusReport402, QUOTE_CANCEL_TYPE,
};
pub use security::{
    SecurityDefinitionLegsEntry, SecurityDefinitionRequest300, SecurityDefinitionResponse301,
};
pub use session::{
    Establish4, EstablishAck5, EstablishReject6, Negotiate1, NegotiateReject3,
    NegotiateResponse2, NotApplied8, RetransmitReject14, RetransmitRequest12, Retransmission13,
    Sequence9, Terminate7,
};
