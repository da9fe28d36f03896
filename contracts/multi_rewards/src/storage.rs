use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, Val};

use crate::errors::ContractError;

// ── Storage key constants ────────────────────────────────────────────────────

pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
pub const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
pub const REWARD_TOKENS: Symbol = symbol_short!("RWD_TOKS");

// Persistent storage uses tuple keys: (prefix, account[, reward_token])
pub const USER_STAKE: Symbol = symbol_short!("STK");
pub const REWARD_DATA: Symbol = symbol_short!("RWD_DATA");
pub const USER_RPT_PAID: Symbol = symbol_short!("RPT_PAID");
pub const USER_OWED: Symbol = symbol_short!("OWED");

// ── TTL ──────────────────────────────────────────────────────────────────────

/// Keep the instance (configuration, totals, channel list) alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Bump a persistent entry that was just written.
pub fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

/// Guard: revert if the contract is not yet initialized.
pub fn require_initialized(env: &Env) -> Result<(), ContractError> {
    if !is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    extend_instance_ttl(env);
    Ok(())
}

pub fn set_staking_token(env: &Env, token: &Address) {
    env.storage().instance().set(&STAKE_TOKEN, token);
    env.storage().instance().set(&INITIALIZED, &true);
}

pub fn staking_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&STAKE_TOKEN)
        .ok_or(ContractError::NotInitialized)
}
