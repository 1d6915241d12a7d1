//! Overflow-checked `u128` arithmetic.
//!
//! Every balance mutation in the escrow goes through these helpers so that a
//! wrap-around surfaces as a contract error instead of a silent bad value.

use crate::errors::Error;

pub fn add(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

pub fn sub(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
}

pub fn mul(a: u128, b: u128) -> Result<u128, Error> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    a.checked_mul(b).ok_or(Error::ArithmeticOverflow)
}

pub fn div(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_div(b).ok_or(Error::DivisionByZero)
}

pub fn modulo(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_rem(b).ok_or(Error::ModuloByZero)
}

/// Convert a ledger amount into the signed amount token clients expect.
pub fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}

