//! Two-level lazy reward accumulator.
//!
//! Each channel keeps a global `reward_per_token_stored`; each account keeps,
//! per channel, the accumulator value it was last settled at
//! (`reward_per_token_paid`) and the reward settled but not yet transferred
//! (`owed`). Settling an account costs O(channels touched) and never depends
//! on the number of stakers.
//!
//! Every stake-ledger mutation must see the accumulators settled against the
//! balances *before* the mutation. [`with_accrual`] is the only way the
//! contract runs such a mutation: it checkpoints first, then runs the body.

use soroban_sdk::{Address, Env, Symbol, Vec, I256};

use crate::channel::{self, RewardData};
use crate::errors::ContractError;
use crate::ledger;
use crate::rewards;
use crate::storage::{extend_persistent_ttl, USER_OWED, USER_RPT_PAID};

// ── Per-account checkpoint storage ──────────────────────────────────────────

fn paid_key(account: &Address, token: &Address) -> (Symbol, Address, Address) {
    (USER_RPT_PAID, account.clone(), token.clone())
}

fn owed_key(account: &Address, token: &Address) -> (Symbol, Address, Address) {
    (USER_OWED, account.clone(), token.clone())
}

pub fn reward_per_token_paid(env: &Env, account: &Address, token: &Address) -> I256 {
    env.storage()
        .persistent()
        .get(&paid_key(account, token))
        .unwrap_or_else(|| I256::from_i32(env, 0))
}

pub fn owed(env: &Env, account: &Address, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&owed_key(account, token))
        .unwrap_or(0)
}

pub fn set_owed(env: &Env, account: &Address, token: &Address, amount: i128) {
    let key = owed_key(account, token);
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

fn set_reward_per_token_paid(env: &Env, account: &Address, token: &Address, rpt: &I256) {
    let key = paid_key(account, token);
    env.storage().persistent().set(&key, rpt);
    extend_persistent_ttl(env, &key);
}

// ── Checkpointing ───────────────────────────────────────────────────────────

/// Advance one channel's accumulator to `now` and persist it.
fn checkpoint_channel(
    env: &Env,
    token: &Address,
    now: u64,
    total_staked: i128,
) -> Result<RewardData, ContractError> {
    let mut data = channel::load(env, token)?;
    data.reward_per_token_stored = data.reward_per_token(env, now, total_staked);
    data.last_update_time = data.last_time_reward_applicable(now);
    channel::store(env, token, &data);
    Ok(data)
}

/// Bring `tokens` channels, and `account`'s position in each, up to date.
///
/// With `account == None` only the channel accumulators move; this is used
/// before a funding notification changes a rate.
pub fn update_reward(
    env: &Env,
    account: Option<&Address>,
    tokens: &Vec<Address>,
) -> Result<(), ContractError> {
    let now = env.ledger().timestamp();
    let total_staked = ledger::total_staked(env);
    let staked = account.map(|a| ledger::balance_of(env, a)).unwrap_or(0);

    for token in tokens.iter() {
        let data = checkpoint_channel(env, &token, now, total_staked)?;

        if let Some(account) = account {
            let settled = rewards::earned(
                env,
                staked,
                &data.reward_per_token_stored,
                &reward_per_token_paid(env, account, &token),
                owed(env, account, &token),
            )?;
            set_owed(env, account, &token, settled);
            set_reward_per_token_paid(env, account, &token, &data.reward_per_token_stored);
        }
    }
    Ok(())
}

/// Checkpoint `tokens` for `account`, then run `body`.
///
/// `body` is where stake balances, totals and rates change; it always sees
/// accumulators settled at the pre-mutation balances.
pub fn with_accrual<T, F>(
    env: &Env,
    account: Option<&Address>,
    tokens: &Vec<Address>,
    body: F,
) -> Result<T, ContractError>
where
    F: FnOnce() -> Result<T, ContractError>,
{
    update_reward(env, account, tokens)?;
    body()
}

// ── Reads ───────────────────────────────────────────────────────────────────

/// Live accumulator value for `token` (pure read).
pub fn reward_per_token(env: &Env, token: &Address) -> Result<I256, ContractError> {
    let data = channel::load(env, token)?;
    Ok(data.reward_per_token(env, env.ledger().timestamp(), ledger::total_staked(env)))
}

/// Reward `account` could claim from `token` right now (pure read).
pub fn earned(env: &Env, account: &Address, token: &Address) -> Result<i128, ContractError> {
    let current_rpt = reward_per_token(env, token)?;
    rewards::earned(
        env,
        ledger::balance_of(env, account),
        &current_rpt,
        &reward_per_token_paid(env, account, token),
        owed(env, account, token),
    )
}
