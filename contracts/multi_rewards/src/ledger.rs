//! Stake ledger: per-account staked balances and their running total.
//!
//! `credit` and `debit` touch the account entry and the total in the same
//! call, so `total_staked == Σ balance_of` holds after every invocation.
//! Neither runs an accrual checkpoint; callers reach them through
//! `accrual::with_accrual`.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage::{extend_persistent_ttl, TOTAL_STAKED, USER_STAKE};

pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

pub fn balance_of(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(USER_STAKE, account.clone()))
        .unwrap_or(0)
}

/// Add `amount` to `account` and to the total. Returns the new total.
pub fn credit(env: &Env, account: &Address, amount: i128) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let new_balance = balance_of(env, account)
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;
    let new_total = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;

    write(env, account, new_balance, new_total);
    Ok(new_total)
}

/// Remove `amount` from `account` and from the total. Returns the new total.
///
/// Fails with `InsufficientBalance` rather than letting the balance go
/// negative.
pub fn debit(env: &Env, account: &Address, amount: i128) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let balance = balance_of(env, account);
    if balance < amount {
        return Err(ContractError::InsufficientBalance);
    }
    let new_total = total_staked(env)
        .checked_sub(amount)
        .ok_or(ContractError::MathOverflow)?;

    write(env, account, balance - amount, new_total);
    Ok(new_total)
}

fn write(env: &Env, account: &Address, balance: i128, total: i128) {
    let key = (USER_STAKE, account.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
    env.storage().instance().set(&TOTAL_STAKED, &total);
}
