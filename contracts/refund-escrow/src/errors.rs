use soroban_sdk::contracterror;

/// Error codes for the refund escrow contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not the primary account
    Unauthorized = 3,
    /// Address argument is not an acceptable identity
    InvalidAddress = 4,
    /// Operation is not permitted in the current lifecycle state
    InvalidState = 5,
    /// Depositor has no whitelist entry
    NotWhitelisted = 6,
    /// Deposit amount differs from the whitelisted amount
    WrongAmount = 7,
    /// Depositor has already invested
    AlreadyInvested = 8,
    /// Investor is already on the whitelist
    DuplicateWhitelistEntry = 9,
    /// Withdrawals are only open while refunding
    WithdrawalNotAllowed = 10,
    ArithmeticOverflow = 11,
    DivisionByZero = 12,
    ModuloByZero = 13,
}
