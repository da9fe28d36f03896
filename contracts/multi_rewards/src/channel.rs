use soroban_sdk::{contracttype, Address, Env, Vec, I256};

use crate::errors::ContractError;
use crate::rewards;
use crate::storage::{extend_persistent_ttl, REWARD_DATA, REWARD_TOKENS};

// ── Types ───────────────────────────────────────────────────────────────────

/// Funding and accrual state of one reward token.
///
/// A channel is created by `add_reward` with a zero rate and is never
/// removed. `period_finish` stays 0 until the first funding.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardData {
    /// Sole account allowed to fund the channel.
    pub rewards_distributor: Address,
    /// Length in seconds of the period started by each funding.
    pub rewards_duration: u64,
    /// End of the current funding period.
    pub period_finish: u64,
    /// Reward units emitted per second across all stakers.
    pub reward_rate: i128,
    /// Time the accumulator was last advanced to.
    pub last_update_time: u64,
    /// Cumulative reward per staked unit, scaled by `rewards::PRECISION`.
    pub reward_per_token_stored: I256,
}

impl RewardData {
    pub fn new(env: &Env, distributor: Address, duration: u64) -> Self {
        RewardData {
            rewards_distributor: distributor,
            rewards_duration: duration,
            period_finish: 0,
            reward_rate: 0,
            last_update_time: 0,
            reward_per_token_stored: I256::from_i32(env, 0),
        }
    }

    pub fn last_time_reward_applicable(&self, now: u64) -> u64 {
        rewards::last_time_reward_applicable(now, self.period_finish)
    }

    /// Accumulator value as of `now`, without writing anything.
    pub fn reward_per_token(&self, env: &Env, now: u64, total_staked: i128) -> I256 {
        rewards::reward_per_token(
            env,
            &self.reward_per_token_stored,
            self.reward_rate,
            self.last_update_time,
            self.last_time_reward_applicable(now),
            total_staked,
        )
    }

    /// `true` while a funded period is still paying out.
    pub fn is_active(&self, now: u64) -> bool {
        now < self.period_finish
    }
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn data_key(token: &Address) -> (soroban_sdk::Symbol, Address) {
    (REWARD_DATA, token.clone())
}

pub fn exists(env: &Env, token: &Address) -> bool {
    env.storage().persistent().has(&data_key(token))
}

/// Retrieve a channel, failing with `RewardNotFound` for unregistered tokens.
pub fn load(env: &Env, token: &Address) -> Result<RewardData, ContractError> {
    env.storage()
        .persistent()
        .get(&data_key(token))
        .ok_or(ContractError::RewardNotFound)
}

pub fn store(env: &Env, token: &Address, data: &RewardData) {
    let key = data_key(token);
    env.storage().persistent().set(&key, data);
    extend_persistent_ttl(env, &key);
}

/// Every registered reward token, in registration order.
pub fn reward_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&REWARD_TOKENS)
        .unwrap_or(Vec::new(env))
}

/// Create a channel for `token`. Registration happens once per token.
pub fn register(
    env: &Env,
    token: &Address,
    distributor: &Address,
    duration: u64,
) -> Result<RewardData, ContractError> {
    if exists(env, token) {
        return Err(ContractError::RewardAlreadyExists);
    }

    let data = RewardData::new(env, distributor.clone(), duration);
    store(env, token, &data);

    let mut tokens = reward_tokens(env);
    tokens.push_back(token.clone());
    env.storage().instance().set(&REWARD_TOKENS, &tokens);

    Ok(data)
}
