use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::safe_math;

use crate::types::{
    EscrowConfig, EscrowState, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::State)
}

// ========== Primary ==========

pub fn get_primary(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Primary)
}

pub fn set_primary(env: &Env, primary: &Address) {
    env.storage().instance().set(&StorageKey::Primary, primary);
}

// ========== Beneficiary / Token ==========

pub fn get_beneficiary(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Beneficiary)
}

pub fn set_beneficiary(env: &Env, beneficiary: &Address) {
    env.storage().instance().set(&StorageKey::Beneficiary, beneficiary);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::Token, token);
}

// ========== State / Config ==========

pub fn get_state(env: &Env) -> Option<EscrowState> {
    env.storage().instance().get(&StorageKey::State)
}

pub fn set_state(env: &Env, state: EscrowState) {
    env.storage().instance().set(&StorageKey::State, &state);
}

pub fn get_config(env: &Env) -> Option<EscrowConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &EscrowConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// ========== Investor Ledger ==========

pub fn get_investors(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&StorageKey::Investors)
        .unwrap_or(Vec::new(env))
}

pub fn add_investor(env: &Env, investor: &Address) {
    let mut investors = get_investors(env);
    investors.push_back(investor.clone());
    env.storage().instance().set(&StorageKey::Investors, &investors);
}

pub fn get_deposit(env: &Env, investor: &Address) -> u128 {
    let key = StorageKey::Deposit(investor.clone());
    let amount = env.storage().persistent().get::<_, u128>(&key);
    if amount.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount.unwrap_or(0)
}

pub fn set_deposit(env: &Env, investor: &Address, amount: u128) {
    let key = StorageKey::Deposit(investor.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn get_deposit_count(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&StorageKey::DepositCount)
        .unwrap_or(0)
}

pub fn increment_deposit_count(env: &Env) -> Result<u128, Error> {
    let counter = safe_math::add(get_deposit_count(env), 1)?;
    env.storage().instance().set(&StorageKey::DepositCount, &counter);
    Ok(counter)
}

pub fn get_total_deposited(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&StorageKey::TotalDeposited)
        .unwrap_or(0)
}

pub fn set_total_deposited(env: &Env, total: u128) {
    env.storage().instance().set(&StorageKey::TotalDeposited, &total);
}

// ========== Whitelist ==========

pub fn get_whitelist_investors(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&StorageKey::WhitelistInvestors)
        .unwrap_or(Vec::new(env))
}

pub fn get_whitelist_amounts(env: &Env) -> Vec<u128> {
    env.storage()
        .instance()
        .get(&StorageKey::WhitelistAmounts)
        .unwrap_or(Vec::new(env))
}

/// Position of `investor` in the whitelist, if present.
pub fn find_whitelist_entry(env: &Env, investor: &Address) -> Option<u32> {
    let investors = get_whitelist_investors(env);
    for (i, addr) in investors.iter().enumerate() {
        if addr == *investor {
            return Some(i as u32);
        }
    }
    None
}

pub fn push_whitelist_entry(env: &Env, investor: &Address, amount: u128) {
    let mut investors = get_whitelist_investors(env);
    let mut amounts = get_whitelist_amounts(env);
    investors.push_back(investor.clone());
    amounts.push_back(amount);
    env.storage()
        .instance()
        .set(&StorageKey::WhitelistInvestors, &investors);
    env.storage()
        .instance()
        .set(&StorageKey::WhitelistAmounts, &amounts);
}

pub fn clear_whitelist(env: &Env) {
    env.storage()
        .instance()
        .set(&StorageKey::WhitelistInvestors, &Vec::<Address>::new(env));
    env.storage()
        .instance()
        .set(&StorageKey::WhitelistAmounts, &Vec::<u128>::new(env));
}
