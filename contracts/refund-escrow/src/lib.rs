#![no_std]

//! # Refund Escrow
//!
//! Soroban contract that custodies contributions from a fixed, pre-approved
//! set of investors and later either refunds them or releases the pot to a
//! beneficiary.
//!
//! ## Lifecycle
//!
//! ```text
//! Active --close--> Closed --enable_refunds--> Refunding
//!   ^                 |    \
//!   +----activate-----+     +--enable_released--> Released
//! ```
//!
//! Deposits are only accepted while `Active`, only from whitelisted
//! addresses, only for the exact whitelisted amount and only once per
//! address. Investors can pull their deposit back with [`RefundEscrow::withdraw`]
//! once the escrow is `Refunding`; the primary can push every refund at once
//! with [`RefundEscrow::refund_all`]. Once `Released`, anyone may trigger
//! [`RefundEscrow::beneficiary_withdraw`].
//!
//! ## Modules
//!
//! - [`errors`]    - [`Error`] variants returned by fallible functions.
//! - [`types`]     - [`EscrowState`], [`EscrowConfig`] and storage keys.
//! - [`safe_math`] - overflow-checked arithmetic used by the ledger.
//! - `access`      - the primary role.
//! - `ledger`      - investor list and per-investor deposits.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod access;
pub mod errors;
mod events;
mod ledger;
pub mod safe_math;
mod storage;
pub mod types;

pub use errors::Error;
pub use types::{EscrowConfig, EscrowState};

use events::{
    BeneficiaryWithdrawnEventData, InitializedEventData, StateChangedEventData,
    WhitelistAddedEventData, WhitelistClearedEventData,
};

#[contract]
pub struct RefundEscrow;

#[contractimpl]
impl RefundEscrow {
    // ========== INITIALIZATION ==========

    /// Set up the escrow.
    ///
    /// `primary` becomes the administrative account and must authorize the
    /// call. Funds are held in `token`; `beneficiary` receives them once the
    /// escrow is released. `config` decides whether [`Self::refund_all`]
    /// zeroes recorded deposits.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - called a second time
    /// * `Error::InvalidAddress` - `beneficiary` is the escrow itself
    pub fn initialize(
        env: Env,
        primary: Address,
        beneficiary: Address,
        token: Address,
        config: EscrowConfig,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        primary.require_auth();

        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        storage::set_primary(&env, &primary);
        storage::set_beneficiary(&env, &beneficiary);
        storage::set_token(&env, &token);
        storage::set_config(&env, &config);
        storage::set_state(&env, EscrowState::Active);
        storage::extend_instance_ttl(&env);

        InitializedEventData {
            primary,
            beneficiary,
            token,
        }
        .publish(&env);

        Ok(())
    }

    // ========== ACCESS CONTROL ==========

    pub fn primary(env: Env) -> Result<Address, Error> {
        storage::get_primary(&env).ok_or(Error::NotInitialized)
    }

    /// Transfer the primary role (primary only)
    pub fn transfer_primary(env: Env, caller: Address, new_primary: Address) -> Result<(), Error> {
        access::transfer_primary(&env, &caller, &new_primary)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    // ========== WHITELIST (Primary Only) ==========

    /// Pre-approve `investor` to deposit exactly `amount`.
    pub fn add_to_whitelist(
        env: Env,
        caller: Address,
        investor: Address,
        amount: u128,
    ) -> Result<(), Error> {
        access::require_primary(&env, &caller)?;

        if storage::find_whitelist_entry(&env, &investor).is_some() {
            return Err(Error::DuplicateWhitelistEntry);
        }

        storage::push_whitelist_entry(&env, &investor, amount);
        storage::extend_instance_ttl(&env);

        WhitelistAddedEventData { investor, amount }.publish(&env);

        Ok(())
    }

    /// Drop every whitelist entry. Recorded deposits are unaffected.
    pub fn clear_whitelist(env: Env, caller: Address) -> Result<(), Error> {
        access::require_primary(&env, &caller)?;

        let entries = storage::get_whitelist_investors(&env).len();
        storage::clear_whitelist(&env);
        storage::extend_instance_ttl(&env);

        WhitelistClearedEventData {
            primary: caller,
            entries,
        }
        .publish(&env);

        Ok(())
    }

    pub fn whitelist_investors(env: Env) -> Vec<Address> {
        storage::get_whitelist_investors(&env)
    }

    pub fn whitelist_amounts(env: Env) -> Vec<u128> {
        storage::get_whitelist_amounts(&env)
    }

    // ========== DEPOSITS ==========

    /// Contribute exactly the whitelisted amount.
    ///
    /// Checks run in order: state, whitelist membership, amount, prior
    /// investment.
    ///
    /// # Errors
    /// * `Error::InvalidState` - escrow is not `Active`
    /// * `Error::NotWhitelisted` - `investor` has no whitelist entry
    /// * `Error::WrongAmount` - `amount` differs from the whitelisted figure
    /// * `Error::AlreadyInvested` - `investor` has deposited before
    pub fn deposit(env: Env, investor: Address, amount: u128) -> Result<(), Error> {
        investor.require_auth();

        if Self::load_state(&env)? != EscrowState::Active {
            return Err(Error::InvalidState);
        }

        let index = storage::find_whitelist_entry(&env, &investor).ok_or(Error::NotWhitelisted)?;
        let required = storage::get_whitelist_amounts(&env)
            .get(index)
            .ok_or(Error::NotWhitelisted)?;
        if amount != required {
            return Err(Error::WrongAmount);
        }

        for existing in storage::get_investors(&env).iter() {
            if existing == investor {
                return Err(Error::AlreadyInvested);
            }
        }

        ledger::deposit(&env, &investor, amount)?;
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    pub fn deposits_of(env: Env, payee: Address) -> u128 {
        ledger::deposits_of(&env, &payee)
    }

    pub fn investors(env: Env) -> Vec<Address> {
        ledger::investors(&env)
    }

    /// Number of deposits recorded so far
    pub fn deposit_count(env: Env) -> u128 {
        storage::get_deposit_count(&env)
    }

    /// Sum of all currently recorded deposits
    pub fn total_deposited(env: Env) -> u128 {
        storage::get_total_deposited(&env)
    }

    // ========== PAYOUTS ==========

    /// Whether investors may currently pull their deposits back.
    pub fn withdrawal_allowed(env: Env) -> bool {
        storage::get_state(&env) == Some(EscrowState::Refunding)
    }

    /// Pay `payee` everything recorded for them. Only open while refunding.
    ///
    /// Returns the amount paid.
    pub fn withdraw(env: Env, payee: Address) -> Result<u128, Error> {
        payee.require_auth();
        Self::load_state(&env)?;

        if !Self::withdrawal_allowed(env.clone()) {
            return Err(Error::WithdrawalNotAllowed);
        }

        let paid = ledger::withdraw(&env, &payee)?;
        storage::extend_instance_ttl(&env);
        Ok(paid)
    }

    /// Refund every investor in deposit order (primary only, `Refunding` only).
    ///
    /// Whether recorded deposits are zeroed depends on
    /// [`EscrowConfig::zero_deposits_on_refund`]. Returns the total paid.
    ///
    /// With zeroing disabled, a repeated call pays the recorded amounts again
    /// and aborts with the token contract's balance error once the escrow no
    /// longer holds enough; nothing from that call is committed.
    pub fn refund_all(env: Env, caller: Address) -> Result<u128, Error> {
        access::require_primary(&env, &caller)?;

        if Self::load_state(&env)? != EscrowState::Refunding {
            return Err(Error::InvalidState);
        }

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let mut total: u128 = 0;
        for investor in ledger::investors(&env).iter() {
            let paid = ledger::refund(&env, &investor, config.zero_deposits_on_refund)?;
            total = safe_math::add(total, paid)?;
        }

        log!(&env, "refunded investors", total);
        storage::extend_instance_ttl(&env);

        Ok(total)
    }

    /// Send the whole escrow balance to the beneficiary. Anyone may call this
    /// once the escrow is `Released`. Returns the amount sent.
    pub fn beneficiary_withdraw(env: Env) -> Result<i128, Error> {
        if Self::load_state(&env)? != EscrowState::Released {
            return Err(Error::InvalidState);
        }

        let beneficiary = storage::get_beneficiary(&env).ok_or(Error::NotInitialized)?;
        let amount = ledger::balance(&env)?;
        ledger::pay_out(&env, &beneficiary, amount)?;
        storage::extend_instance_ttl(&env);

        BeneficiaryWithdrawnEventData {
            beneficiary,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    // ========== LIFECYCLE (Primary Only) ==========

    /// `Active -> Closed`
    pub fn close(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(&env, &caller, EscrowState::Closed)
    }

    /// `Closed -> Active`
    pub fn activate(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(&env, &caller, EscrowState::Active)
    }

    /// `Closed -> Refunding`
    pub fn enable_refunds(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(&env, &caller, EscrowState::Refunding)
    }

    /// `Closed -> Released`
    pub fn enable_released(env: Env, caller: Address) -> Result<(), Error> {
        Self::transition(&env, &caller, EscrowState::Released)
    }

    // ========== QUERIES ==========

    pub fn state(env: Env) -> Result<EscrowState, Error> {
        Self::load_state(&env)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        storage::get_beneficiary(&env).ok_or(Error::NotInitialized)
    }

    /// Address of the escrowed token
    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env).ok_or(Error::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<EscrowConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Token balance currently custodied by the escrow
    pub fn total_balance(env: Env) -> Result<i128, Error> {
        ledger::balance(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn load_state(env: &Env) -> Result<EscrowState, Error> {
        storage::get_state(env).ok_or(Error::NotInitialized)
    }

    fn transition(env: &Env, caller: &Address, to: EscrowState) -> Result<(), Error> {
        access::require_primary(env, caller)?;

        let from = Self::load_state(env)?;
        if !from.can_transition_to(&to) {
            return Err(Error::InvalidState);
        }

        storage::set_state(env, to);
        storage::extend_instance_ttl(env);
        log!(env, "escrow state changed", from as u32, to as u32);

        StateChangedEventData {
            primary: caller.clone(),
            from: from as u32,
            to: to as u32,
        }
        .publish(env);

        Ok(())
    }
}

#[cfg(test)]
mod test;
