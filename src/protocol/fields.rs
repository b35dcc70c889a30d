//! BOE enumerations and sets
//!
//! Char-based enums disimpan sebagai ASCII byte, sisanya sebagai integer.
//! Discriminant harus persis sama dengan schema B3.

sbe_enum! {
    /// Boolean encoded as u8.
    pub enum Boolean: u8 {
        False = 0,
        True = 1,
    }
}

sbe_enum! {
    pub enum AllocTransType: char {
        New = b'0',
        Cancel = b'2',
    }
}

sbe_enum! {
    pub enum AllocReportType: char {
        RequestToIntermediary = b'8',
    }
}

sbe_enum! {
    pub enum AllocType: char {
        RequestToIntermediary = b'8',
    }
}

sbe_enum! {
    pub enum AllocNoOrdersType: char {
        NotSpecified = b'0',
    }
}

sbe_enum! {
    pub enum AllocStatus: char {
        Accepted = b'0',
        RejectedByIntermediary = b'5',
    }
}

sbe_enum! {
    pub enum QuoteStatus: u8 {
        Expired = 7,
        Accepted = 0,
        Rejected = 5,
        QuoteNotFound = 9,
        Pending = 10,
        Pass = 11,
        Canceled = 17,
    }
}

sbe_enum! {
    pub enum QuoteStatusResponseTo: char {
        Quote = b'0',
        QuoteRequest = b'1',
        QuoteCancel = b'2',
        QuoteRequestReject = b'3',
    }
}

sbe_enum! {
    pub enum QuoteCancelType: u8 {
        CancelForQuoteId = 5,
    }
}

sbe_enum! {
    /// Type of quantity in a position maintenance group.
    pub enum PosType: char {
        TransactionQuantity = b'T',
        StartOfDayQty = b'S',
        OptionExerciseQty = b'E',
        BlockedQty = b'B',
        UncoveredQty = b'U',
        CoveredQty = b'C',
    }
}

sbe_enum! {
    pub enum MassActionScope: u8 {
        AllOrdersForATradingSession = 6,
    }
}

sbe_enum! {
    pub enum MassActionType: u8 {
        ReleaseOrdersFromSuspension = 2,
        CancelOrders = 3,
        CancelAndSuspendOrders = 4,
    }
}

sbe_enum! {
    pub enum MassActionResponse: char {
        Rejected = b'0',
        Accepted = b'1',
    }
}

sbe_enum! {
    pub enum MassActionRejectReason: u8 {
        MassActionNotSupported = 0,
        InvalidOrUnknownMarketSegment = 8,
        Other = 99,
    }
}

sbe_enum! {
    pub enum SecurityResponseType: u8 {
        AcceptSecurityProposalAsIs = 1,
        RejectSecurityProposal = 5,
        AcceptSecurityAsProposalWithRevisions = 2,
    }
}

sbe_enum! {
    pub enum PosMaintStatus: char {
        Accepted = b'0',
        Rejected = b'2',
        Completed = b'3',
        NotExecuted = b'9',
    }
}

sbe_enum! {
    pub enum ExecuteUnderlyingTrade: char {
        NoUnderlyingTrade = b'0',
        UnderlyingOpposingTrade = b'1',
    }
}

sbe_enum! {
    pub enum PosTransType: u8 {
        Exercise = 1,
        AutomaticExercise = 105,
        ExerciseNotAutomatic = 106,
    }
}

sbe_enum! {
    pub enum PosMaintAction: char {
        New = b'1',
        Cancel = b'3',
    }
}

sbe_enum! {
    pub enum SettlType: char {
        BuyersDiscretion = b'0',
        SellersDiscretion = b'8',
        Mutual = b'X',
    }
}

sbe_enum! {
    pub enum SelfTradePreventionInstruction: u8 {
        None = 0,
        CancelAggressorOrder = 1,
        CancelRestingOrder = 2,
        CancelBothOrders = 3,
    }
}

sbe_enum! {
    pub enum TimeUnit: u8 {
        Second = 0,
        Millisecond = 3,
        Microsecond = 6,
        Nanosecond = 9,
    }
}

sbe_enum! {
    /// Message kind as carried by the session layer.
    pub enum MessageType: u8 {
        Negotiate = 0,
        NegotiateResponse = 1,
        NegotiateReject = 2,
        Establish = 3,
        EstablishAck = 4,
        EstablishReject = 5,
        Terminate = 6,
        NotApplied = 9,
        RetransmitRequest = 10,
        Retransmission = 11,
        RetransmitReject = 12,
        Sequence = 13,
        BusinessMessageReject = 14,
        SimpleNewOrder = 15,
        SimpleModifyOrder = 16,
        NewOrderSingle = 17,
        OrderCancelReplaceRequest = 18,
        OrderCancelRequest = 19,
        NewOrderCross = 20,
        ExecutionReportNew = 21,
        ExecutionReportModify = 22,
        ExecutionReportCancel = 23,
        ExecutionReportTrade = 24,
        ExecutionReportReject = 25,
        ExecutionReportForward = 26,
        SecurityDefinitionRequest = 27,
        SecurityDefinitionResponse = 28,
        OrderMassActionRequest = 29,
        OrderMassActionReport = 30,
        QuoteRequest = 31,
        QuoteStatusReport = 32,
        Quote = 33,
        QuoteCancel = 34,
        QuoteRequestReject = 35,
        PositionMaintenanceCancelRequest = 36,
        PositionMaintenanceRequest = 37,
        PositionMaintenanceReport = 38,
        AllocationInstruction = 39,
        AllocationReport = 40,
    }
}

sbe_enum! {
    pub enum FlowType: u8 {
        None = 0,
        Recoverable = 1,
        Unsequenced = 2,
        Idempotent = 3,
    }
}

sbe_enum! {
    pub enum NegotiationRejectCode: u8 {
        Unspecified = 0,
        Credentials = 1,
        FlowtypeNotSupported = 2,
        AlreadyNegotiated = 3,
        SessionBlocked = 4,
        InvalidSessionId = 5,
        InvalidSessionVerId = 6,
        InvalidTimestamp = 7,
        InvalidFirm = 8,
        NegotiateNotAllowed = 20,
        DuplicateSessionConnection = 21,
        AuthenticationInProgress = 22,
        ProtocolVersionNotSupported = 23,
    }
}

sbe_enum! {
    pub enum EstablishRejectCode: u8 {
        Unspecified = 0,
        Credentials = 1,
        Unnegotiated = 2,
        AlreadyEstablished = 3,
        SessionBlocked = 4,
        InvalidSessionId = 5,
        InvalidSessionVerId = 6,
        InvalidTimestamp = 7,
        InvalidKeepaliveInterval = 8,
        InvalidNextSeqNo = 9,
        EstablishAttemptsExceeded = 10,
        EstablishNotAllowed = 20,
        DuplicateSessionConnection = 21,
        AuthenticationInProgress = 22,
        ProtocolVersionNotSupported = 23,
    }
}

sbe_enum! {
    pub enum TerminationCode: u8 {
        Unspecified = 0,
        Finished = 1,
        Unnegotiated = 2,
        NotEstablished = 3,
        SessionBlocked = 4,
        NegotiationInProgress = 5,
        EstablishInProgress = 6,
        KeepaliveIntervalLapsed = 10,
        InvalidSessionId = 11,
        InvalidSessionVerId = 12,
        InvalidTimestamp = 13,
        InvalidNextSeqNo = 14,
        UnrecognizedMessage = 15,
        InvalidSofh = 16,
        DecodingError = 17,
        TerminateNotAllowed = 20,
        TerminateInProgress = 21,
        ProtocolVersionNotSupported = 23,
        BackupTakeoverInProgress = 30,
    }
}

sbe_enum! {
    pub enum RetransmitRejectCode: u8 {
        OutOfRange = 0,
        InvalidSession = 1,
        RequestLimitExceeded = 2,
        RetransmitInProgress = 3,
        InvalidTimestamp = 4,
        InvalidFromSeqNo = 5,
        InvalidCount = 9,
        ThrottleReject = 10,
        SystemBusy = 11,
    }
}

sbe_enum! {
    pub enum CancelOnDisconnectType: u8 {
        DoNotCancelOnDisconnectOrTerminate = 0,
        CancelOnDisconnectOnly = 1,
        CancelOnTerminateOnly = 2,
        CancelOnDisconnectOrTerminate = 3,
    }
}

sbe_enum! {
    pub enum Side: char {
        Buy = b'1',
        Sell = b'2',
    }
}

sbe_enum! {
    pub enum TimeInForce: char {
        Day = b'0',
        GoodTillCancel = b'1',
        ImmediateOrCancel = b'3',
        FillOrKill = b'4',
        GoodTillDate = b'6',
        AtTheClose = b'7',
        GoodForAuction = b'A',
    }
}

sbe_enum! {
    /// Time in force accepted by the simple order messages.
    pub enum SimpleTimeInForce: char {
        Day = b'0',
        ImmediateOrCancel = b'3',
        FillOrKill = b'4',
    }
}

sbe_enum! {
    pub enum OrdType: char {
        Market = b'1',
        Limit = b'2',
        StopLoss = b'3',
        StopLimit = b'4',
        MarketWithLeftoverAsLimit = b'K',
        Rlp = b'W',
        PeggedMidpoint = b'P',
    }
}

sbe_enum! {
    pub enum SimpleOrdType: char {
        Market = b'1',
        Limit = b'2',
    }
}

sbe_enum! {
    pub enum RoutingInstruction: u8 {
        RetailLiquidityTaker = 1,
        WaivedPriority = 2,
        BrokerOnly = 3,
        BrokerOnlyRemoval = 4,
    }
}

sbe_enum! {
    pub enum ExecType: char {
        Trade = b'F',
        TradeCancel = b'H',
    }
}

sbe_enum! {
    pub enum OrdStatus: char {
        New = b'0',
        PartiallyFilled = b'1',
        Filled = b'2',
        Canceled = b'4',
        Replaced = b'5',
        Rejected = b'8',
        Expired = b'C',
        Restated = b'R',
        PreviousFinalState = b'Z',
    }
}

sbe_enum! {
    pub enum ExecRestatementReasonValidForSingleCancel: u8 {
        CancelOrderDueToOperationalError = 203,
    }
}

sbe_enum! {
    pub enum ExecRestatementReasonValidForMassCancel: u8 {
        OrderMassActionFromClientRequest = 202,
        MassCancelOrderDueToOperationalErrorRequest = 207,
    }
}

sbe_enum! {
    pub enum ExecRestatementReason: u8 {
        MarketOption = 8,
        CancelOnHardDisconnection = 100,
        CancelOnTerminate = 101,
        CancelOnDisconnectAndTerminate = 102,
        SelfTradingPrevention = 103,
        CancelFromFirmsoft = 105,
        CancelRestingOrderOnSelfTrade = 107,
        MarketMakerProtection = 200,
        RiskManagementCancellation = 201,
        OrderMassActionFromClientRequest = 202,
        CancelOrderDueToOperationalError = 203,
        OrderCancelledDueToOperationalError = 204,
        CancelOrderFirmsoftDueToOperationalError = 205,
        OrderCancelledFirmsoftDueToOperationalError = 206,
        MassCancelOrderDueToOperationalErrorRequest = 207,
        MassCancelOrderDueToOperationalErrorEffective = 208,
        CancelOnMidpointBrokerOnlyRemoval = 209,
        CancelRemainingFromSweepCross = 210,
        MassCancelOnBehalf = 211,
        MassCancelOnBehalfDueToOperationalErrorEffective = 212,
    }
}

sbe_enum! {
    pub enum MultiLegReportingType: char {
        SingleSecurity = b'1',
        IndividualLegOfMultilegSecurity = b'2',
        MultilegSecurity = b'3',
    }
}

sbe_enum! {
    pub enum OrderCategory: char {
        ResultOfOptionsExercise = b'B',
        ResultOfAssignmentFromAnOptionsExercise = b'C',
        ResultOfAutomaticOptionsExercise = b'D',
        ResultOfMidpointOrder = b'E',
        ResultOfBlockBookTrade = b'F',
        ResultOfTradeAtClose = b'G',
        ResultOfTradeAtAverage = b'H',
        ImpliedOrder = b'7',
    }
}

sbe_enum! {
    pub enum AccountType: u8 {
        RemoveAccountInformation = 38,
        RegularAccount = 39,
    }
}

sbe_enum! {
    pub enum CxlRejResponseTo: u8 {
        New = 0,
        Cancel = 1,
        Replace = 2,
    }
}

sbe_enum! {
    pub enum PossResend: u8 {
        False = 0,
        True = 1,
    }
}

sbe_enum! {
    pub enum SecurityIdSource: char {
        Isin = b'4',
        ExchangeSymbol = b'8',
    }
}

sbe_enum! {
    pub enum CrossedIndicator: u16 {
        StructuredTransaction = 1001,
        OperationalError = 1002,
        TwapVwap = 1003,
    }
}

sbe_enum! {
    pub enum TradingSessionId: u8 {
        RegularDaySession = 1,
        NonRegularSession = 6,
    }
}

sbe_enum! {
    pub enum TradingSessionSubId: u8 {
        Pause = 2,
        Close = 4,
        Open = 17,
        PreClose = 18,
        PreOpen = 21,
        FinalClosingCall = 101,
    }
}

sbe_enum! {
    pub enum SecurityTradingStatus: u8 {
        TradingHalt = 2,
        NoOpen = 4,
        ReadyToTrade = 17,
        Forbidden = 18,
        UnknownOrInvalid = 20,
        PreOpen = 21,
        FinalClosingCall = 101,
        Reserved = 110,
    }
}

sbe_enum! {
    pub enum CrossType: u8 {
        AllOrNoneCross = 1,
        CrossExecutedAgainstBookFromClient = 4,
    }
}

sbe_enum! {
    pub enum CrossPrioritization: u8 {
        None = 0,
        BuySideIsPrioritized = 1,
        SellSideIsPrioritized = 2,
    }
}

/// Set of event flags carried by outbound and bidirectional headers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventIndicator(u8);

impl EventIndicator {
    const POSS_RESEND: u8 = 0x1;
    const LOW_PRIORITY: u8 = 0x2;

    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Message is a retransmission.
    #[inline(always)]
    pub const fn poss_resend(&self) -> bool {
        self.0 & Self::POSS_RESEND != 0
    }

    pub fn set_poss_resend(&mut self, value: bool) -> &mut Self {
        self.set(Self::POSS_RESEND, value)
    }

    #[inline(always)]
    pub const fn low_priority(&self) -> bool {
        self.0 & Self::LOW_PRIORITY != 0
    }

    pub fn set_low_priority(&mut self, value: bool) -> &mut Self {
        self.set(Self::LOW_PRIORITY, value)
    }

    fn set(&mut self, bit: u8, value: bool) -> &mut Self {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
        self
    }
}

impl std::fmt::Debug for EventIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventIndicator")
            .field("poss_resend", &self.poss_resend())
            .field("low_priority", &self.low_priority())
            .finish()
    }
}
