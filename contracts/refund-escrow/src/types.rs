use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// Instance storage TTL (30 days), bumped when within a day of expiry
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Persistent storage TTL (90 days) for per-investor deposit records
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the refund escrow contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Primary,
    Beneficiary,
    Token,
    State,
    Config,
    Investors,
    Deposit(Address),
    DepositCount,
    TotalDeposited,
    WhitelistInvestors,
    WhitelistAmounts,
}

/// Escrow lifecycle.
///
/// `Active -> Closed`, `Closed -> Active`, `Closed -> Refunding` and
/// `Closed -> Released` are the only transitions. `Refunding` and `Released`
/// are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum EscrowState {
    Active = 0,
    Closed = 1,
    Refunding = 2,
    Released = 3,
}

impl EscrowState {
    pub fn can_transition_to(&self, next: &EscrowState) -> bool {
        matches!(
            (self, next),
            (EscrowState::Active, EscrowState::Closed)
                | (EscrowState::Closed, EscrowState::Active)
                | (EscrowState::Closed, EscrowState::Refunding)
                | (EscrowState::Closed, EscrowState::Released)
        )
    }
}

/// Deployment-time escrow configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    /// When set, `refund_all` zeroes each recorded deposit before paying it
    /// out. When clear, recorded deposits are left as they were.
    pub zero_deposits_on_refund: bool,
}
