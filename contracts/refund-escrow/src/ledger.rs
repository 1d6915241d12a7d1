//! Investor ledger: the ordered list of everyone who has deposited, and the
//! amount currently recorded for each of them.
//!
//! This layer performs no admission checks. Callers decide who may deposit
//! and when payouts are allowed.

use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::Error;
use crate::events::{DepositedEventData, RefundedEventData, WithdrawnEventData};
use crate::safe_math;
use crate::storage;

pub fn deposits_of(env: &Env, payee: &Address) -> u128 {
    storage::get_deposit(env, payee)
}

pub fn investors(env: &Env) -> Vec<Address> {
    storage::get_investors(env)
}

/// Pull `amount` from `investor` into the escrow and credit it.
pub fn deposit(env: &Env, investor: &Address, amount: u128) -> Result<(), Error> {
    let credited = safe_math::add(storage::get_deposit(env, investor), amount)?;
    let total = safe_math::add(storage::get_total_deposited(env), amount)?;

    let token_client = token_client(env)?;
    token_client.transfer(
        investor,
        &env.current_contract_address(),
        &safe_math::to_token_amount(amount)?,
    );

    storage::add_investor(env, investor);
    storage::increment_deposit_count(env)?;
    storage::set_deposit(env, investor, credited);
    storage::set_total_deposited(env, total);

    DepositedEventData {
        investor: investor.clone(),
        amount,
    }
    .publish(env);

    Ok(())
}

/// Pay out everything recorded for `payee`. The record is zeroed before the
/// token transfer.
pub fn withdraw(env: &Env, payee: &Address) -> Result<u128, Error> {
    let payment = zero_deposit(env, payee)?;
    pay(env, payee, payment)?;

    WithdrawnEventData {
        payee: payee.clone(),
        amount: payment,
    }
    .publish(env);

    Ok(payment)
}

/// Pay `investor` their recorded deposit as part of a bulk refund. With
/// `zero_first` clear the record is left untouched.
pub fn refund(env: &Env, investor: &Address, zero_first: bool) -> Result<u128, Error> {
    let payment = if zero_first {
        zero_deposit(env, investor)?
    } else {
        storage::get_deposit(env, investor)
    };
    pay(env, investor, payment)?;

    RefundedEventData {
        investor: investor.clone(),
        amount: payment,
    }
    .publish(env);

    Ok(payment)
}

/// Token balance held by the escrow.
pub fn balance(env: &Env) -> Result<i128, Error> {
    Ok(token_client(env)?.balance(&env.current_contract_address()))
}

/// Send `amount` of the escrowed token from the escrow to `to`. Zero amounts
/// skip the token call.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        token_client(env)?.transfer(&env.current_contract_address(), to, &amount);
    }
    Ok(())
}

fn pay(env: &Env, to: &Address, amount: u128) -> Result<(), Error> {
    pay_out(env, to, safe_math::to_token_amount(amount)?)
}

fn zero_deposit(env: &Env, payee: &Address) -> Result<u128, Error> {
    let payment = storage::get_deposit(env, payee);
    if payment > 0 {
        let total = safe_math::sub(storage::get_total_deposited(env), payment)?;
        storage::set_deposit(env, payee, 0);
        storage::set_total_deposited(env, total);
    }
    Ok(payment)
}

fn token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token = storage::get_token(env).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token))
}
