use soroban_sdk::{contractevent, Address};

/// Event emitted when the escrow is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub primary: Address,
    pub beneficiary: Address,
    pub token: Address,
}

/// Event emitted when the primary role changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimaryTransferredEventData {
    #[topic]
    pub previous: Address,
    #[topic]
    pub new_primary: Address,
}

/// Event emitted when an investor is whitelisted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistAddedEventData {
    #[topic]
    pub investor: Address,
    pub amount: u128,
}

/// Event emitted when the whitelist is cleared
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistClearedEventData {
    #[topic]
    pub primary: Address,
    pub entries: u32,
}

/// Event emitted when a deposit is recorded
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEventData {
    #[topic]
    pub investor: Address,
    pub amount: u128,
}

/// Event emitted when an investor withdraws
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub payee: Address,
    pub amount: u128,
}

/// Event emitted for each payout made by `refund_all`
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEventData {
    #[topic]
    pub investor: Address,
    pub amount: u128,
}

/// Event emitted on every lifecycle transition
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateChangedEventData {
    #[topic]
    pub primary: Address,
    pub from: u32,
    pub to: u32,
}

/// Event emitted when the beneficiary is paid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BeneficiaryWithdrawnEventData {
    #[topic]
    pub beneficiary: Address,
    pub amount: i128,
}
