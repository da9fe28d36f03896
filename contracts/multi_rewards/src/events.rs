#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub staking_token: Address,
    pub timestamp: u64,
}

/// Fired when the owner registers a new reward channel.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAddedEvent {
    pub reward_token: Address,
    pub distributor: Address,
    pub duration: u64,
    pub timestamp: u64,
}

/// Fired when a channel's distributor is reassigned.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributorSetEvent {
    pub reward_token: Address,
    pub distributor: Address,
    pub timestamp: u64,
}

/// Fired when a distributor funds a channel.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardNotifiedEvent {
    pub reward_token: Address,
    pub amount: i128,
    pub reward_rate: i128,
    pub period_finish: u64,
    pub timestamp: u64,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user takes stake back.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired for each nonzero reward transfer.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub reward_token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a channel's period length changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationUpdatedEvent {
    pub reward_token: Address,
    pub duration: u64,
    pub timestamp: u64,
}

/// Fired when the owner pulls a stray token out of the contract.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveredEvent {
    pub token: Address,
    pub amount: i128,
    pub recipient: Address,
    pub timestamp: u64,
}

/// Fired only when the pause flag actually flips.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub paused: bool,
    pub timestamp: u64,
}

/// Fired when the owner nominates a successor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerNominatedEvent {
    pub owner: Address,
    pub nominee: Address,
    pub timestamp: u64,
}

/// Fired when a nominee accepts ownership.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChangedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when an account gains or loses the manager flag.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagerEvent {
    pub account: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, staking_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            staking_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_added(env: &Env, reward_token: Address, distributor: Address, duration: u64) {
    env.events().publish(
        (symbol_short!("RWD_ADDED"), reward_token.clone()),
        RewardAddedEvent {
            reward_token,
            distributor,
            duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_distributor_set(env: &Env, reward_token: Address, distributor: Address) {
    env.events().publish(
        (symbol_short!("DIST_SET"), reward_token.clone()),
        DistributorSetEvent {
            reward_token,
            distributor,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_notified(
    env: &Env,
    reward_token: Address,
    amount: i128,
    reward_rate: i128,
    period_finish: u64,
) {
    env.events().publish(
        (symbol_short!("RWD_NOTIF"), reward_token.clone()),
        RewardNotifiedEvent {
            reward_token,
            amount,
            reward_rate,
            period_finish,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: i128, new_total_staked: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, reward_token: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), staker.clone(), reward_token.clone()),
        RewardPaidEvent {
            staker,
            reward_token,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_duration_updated(env: &Env, reward_token: Address, duration: u64) {
    env.events().publish(
        (symbol_short!("DUR_UPD"), reward_token.clone()),
        DurationUpdatedEvent {
            reward_token,
            duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_recovered(env: &Env, token: Address, amount: i128, recipient: Address) {
    env.events().publish(
        (symbol_short!("RECOVERED"), token.clone()),
        RecoveredEvent {
            token,
            amount,
            recipient,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pause_changed(env: &Env, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSE_CHG"),),
        PauseChangedEvent {
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_nominated(env: &Env, owner: Address, nominee: Address) {
    env.events().publish(
        (symbol_short!("OWN_NOM"), owner.clone()),
        OwnerNominatedEvent {
            owner,
            nominee,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_changed(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_CHG"), new_owner.clone()),
        OwnerChangedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_manager_set(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("MGR_SET"), account.clone()),
        ManagerEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_manager_removed(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("MGR_RMV"), account.clone()),
        ManagerEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}
