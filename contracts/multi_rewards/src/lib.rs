#![no_std]

pub mod access;
pub mod accrual;
pub mod channel;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod recovery;
pub mod rewards;
pub mod storage;

use common::{managers, ownership, pause};
use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, Vec, I256};

use access::Role;
pub use channel::RewardData;
pub use errors::{ContractError, ErrorCategory};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Staking pool paying any number of independently funded reward tokens
/// pro rata to stake.
#[contract]
pub struct MultiRewardsContract;

#[contractimpl]
impl MultiRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`         – account allowed to run the administrative surface.
    /// * `staking_token` – SAC address of the token users stake.
    pub fn initialize(
        env: Env,
        owner: Address,
        staking_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        ownership::set_owner(&env, &owner);
        storage::set_staking_token(&env, &staking_token);
        storage::extend_instance_ttl(&env);
        // TOTAL_STAKED, PAUSED and RWD_TOKS read as zero/false/empty when
        // absent, so no explicit init needed.

        events::publish_initialized(&env, owner, staking_token);

        Ok(())
    }

    // ── Reward channel administration ───────────────────────────────────────

    /// Register `reward_token` as a new reward channel funded by
    /// `distributor` over periods of `duration` seconds. Owner only; each
    /// token can be registered once.
    pub fn add_reward(
        env: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
        duration: u64,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        if reward_token == storage::staking_token(&env)? {
            return Err(ContractError::TokensIdentical);
        }
        channel::register(&env, &reward_token, &distributor, duration)?;

        events::publish_reward_added(&env, reward_token, distributor, duration);

        Ok(())
    }

    /// Reassign the account allowed to fund `reward_token`. Owner only.
    pub fn set_rewards_distributor(
        env: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        let mut data = channel::load(&env, &reward_token)?;
        data.rewards_distributor = distributor.clone();
        channel::store(&env, &reward_token, &data);

        events::publish_distributor_set(&env, reward_token, distributor);

        Ok(())
    }

    /// Change the period length used by the next funding of `reward_token`.
    ///
    /// Rejected with `RewardPeriodActive` while a period is running, so a
    /// live rate is never re-paced retroactively. Owner or manager.
    pub fn set_rewards_duration(
        env: Env,
        caller: Address,
        reward_token: Address,
        duration: u64,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Manager)?;

        let mut data = channel::load(&env, &reward_token)?;
        if data.is_active(env.ledger().timestamp()) {
            return Err(ContractError::RewardPeriodActive);
        }
        data.rewards_duration = duration;
        channel::store(&env, &reward_token, &data);

        events::publish_duration_updated(&env, reward_token, duration);

        Ok(())
    }

    /// Fund `reward_token` with `amount`, pulled from the distributor.
    ///
    /// The channel accumulator is flushed at the old rate first. A fresh
    /// period pays `amount / duration`; a top-up blends the unpaid remainder
    /// of the running period into the new rate. Either way a new period of
    /// `rewards_duration` seconds starts now.
    pub fn notify_reward_amount(
        env: Env,
        caller: Address,
        reward_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Distributor(reward_token.clone()))?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let reward_client = token::Client::new(&env, &reward_token);
        let contract = env.current_contract_address();
        let touched = vec![&env, reward_token.clone()];

        let data = accrual::with_accrual(&env, None, &touched, || {
            let mut data = channel::load(&env, &reward_token)?;
            let now = env.ledger().timestamp();

            data.reward_rate = rewards::notified_rate(
                amount,
                data.rewards_duration,
                now,
                data.period_finish,
                data.reward_rate,
            )?;

            // Custody as it will stand once this deposit lands.
            let custody = reward_client
                .balance(&contract)
                .checked_add(amount)
                .ok_or(ContractError::MathOverflow)?;
            rewards::check_solvency(data.reward_rate, custody, data.rewards_duration)?;

            data.last_update_time = now;
            data.period_finish = now
                .checked_add(data.rewards_duration)
                .ok_or(ContractError::MathOverflow)?;
            channel::store(&env, &reward_token, &data);
            Ok(data)
        })?;

        reward_client.transfer(&caller, &contract, &amount);

        events::publish_reward_notified(
            &env,
            reward_token,
            amount,
            data.reward_rate,
            data.period_finish,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// Every channel is checkpointed against the pre-deposit supply before
    /// the balance grows, so the deposit never earns retroactively.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        staker.require_auth();
        access::require_not_paused(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let tokens = channel::reward_tokens(&env);
        let new_total = accrual::with_accrual(&env, Some(&staker), &tokens, || {
            ledger::credit(&env, &staker, amount)
        })?;

        let stake_token = storage::staking_token(&env)?;
        token::Client::new(&env, &stake_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        events::publish_staked(&env, staker, amount, new_total);

        Ok(())
    }

    /// Return `amount` stake tokens to the staker.
    ///
    /// Fails with `InsufficientBalance` when `amount` exceeds the stake,
    /// including for accounts that never staked.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let tokens = channel::reward_tokens(&env);
        let new_total = accrual::with_accrual(&env, Some(&staker), &tokens, || {
            ledger::debit(&env, &staker, amount)
        })?;

        Self::return_stake(&env, &staker, amount, new_total)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim everything owed to `staker` across all reward channels.
    ///
    /// Channels with nothing owed are skipped silently: no transfer and no
    /// `RWD_PAID` event.
    pub fn get_reward(env: Env, staker: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        staker.require_auth();

        let tokens = channel::reward_tokens(&env);
        let payouts = accrual::with_accrual(&env, Some(&staker), &tokens, || {
            Ok(Self::settle_owed(&env, &staker, &tokens))
        })?;

        Self::pay_out(&env, &staker, &payouts);

        Ok(())
    }

    /// Withdraw the whole stake and claim all rewards in one call.
    ///
    /// Fails with `InvalidAmount` for an account holding no stake.
    pub fn exit(env: Env, staker: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        staker.require_auth();

        let amount = ledger::balance_of(&env, &staker);
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let tokens = channel::reward_tokens(&env);
        let (new_total, payouts) = accrual::with_accrual(&env, Some(&staker), &tokens, || {
            let new_total = ledger::debit(&env, &staker, amount)?;
            Ok((new_total, Self::settle_owed(&env, &staker, &tokens)))
        })?;

        Self::return_stake(&env, &staker, amount, new_total)?;
        Self::pay_out(&env, &staker, &payouts);

        Ok(())
    }

    // ── Recovery ────────────────────────────────────────────────────────────

    /// Send `amount` of a stray `token` held by the contract to the owner.
    ///
    /// The staking token, and any reward token whose period is still running,
    /// are refused with `RecoveryForbidden`.
    pub fn recover_foreign_asset(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        recovery::ensure_recoverable(&env, &token)?;

        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        events::publish_recovered(&env, token, amount, caller);

        Ok(())
    }

    // ── Pause / ownership / managers ────────────────────────────────────────

    /// Set the pause flag. Owner only. `PAUSE_CHG` fires only when the value
    /// changes.
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        if pause::set_paused(&env, paused) {
            events::publish_pause_changed(&env, paused);
        }

        Ok(())
    }

    /// Propose `candidate` as the next owner. The candidate must call
    /// `accept_ownership` to complete the transfer.
    pub fn nominate_new_owner(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        ownership::nominate(&env, &candidate);

        events::publish_owner_nominated(&env, caller, candidate);

        Ok(())
    }

    /// Complete a nominated ownership transfer. Anyone but the current
    /// nominee gets `NotNominated`.
    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Nominee)?;

        let old_owner = ownership::accept(&env, &caller).ok_or(ContractError::NotNominated)?;

        events::publish_owner_changed(&env, old_owner, caller);

        Ok(())
    }

    /// Grant the manager flag to each of `accounts`. Owner only.
    pub fn set_managers(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        for account in accounts.iter() {
            if managers::add_manager(&env, &account) {
                events::publish_manager_set(&env, account);
            }
        }

        Ok(())
    }

    /// Revoke the manager flag from each of `accounts`. Owner only.
    pub fn remove_managers(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), ContractError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        access::require_role(&env, &caller, &Role::Owner)?;

        for account in accounts.iter() {
            if managers::remove_manager(&env, &account) {
                events::publish_manager_removed(&env, account);
            }
        }

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Sum of all staked balances.
    pub fn total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    pub fn staked_balance_of(env: Env, account: Address) -> i128 {
        ledger::balance_of(&env, &account)
    }

    /// Live accumulator of `reward_token`, scaled by 10^18.
    pub fn reward_per_token(env: Env, reward_token: Address) -> Result<I256, ContractError> {
        accrual::reward_per_token(&env, &reward_token)
    }

    /// Reward `account` could claim from `reward_token` right now.
    pub fn earned(
        env: Env,
        account: Address,
        reward_token: Address,
    ) -> Result<i128, ContractError> {
        accrual::earned(&env, &account, &reward_token)
    }

    /// `reward_rate × rewards_duration` for `reward_token`.
    pub fn get_reward_for_duration(env: Env, reward_token: Address) -> Result<i128, ContractError> {
        let data = channel::load(&env, &reward_token)?;
        rewards::reward_for_duration(data.reward_rate, data.rewards_duration)
    }

    pub fn last_time_reward_applicable(
        env: Env,
        reward_token: Address,
    ) -> Result<u64, ContractError> {
        let data = channel::load(&env, &reward_token)?;
        Ok(data.last_time_reward_applicable(env.ledger().timestamp()))
    }

    pub fn reward_data(env: Env, reward_token: Address) -> Result<RewardData, ContractError> {
        channel::load(&env, &reward_token)
    }

    /// Registered reward tokens in registration order.
    pub fn reward_tokens(env: Env) -> Vec<Address> {
        channel::reward_tokens(&env)
    }

    pub fn user_reward_per_token_paid(env: Env, account: Address, reward_token: Address) -> I256 {
        accrual::reward_per_token_paid(&env, &account, &reward_token)
    }

    /// Reward settled for `account` at its last checkpoint but not yet paid.
    pub fn rewards(env: Env, account: Address, reward_token: Address) -> i128 {
        accrual::owed(&env, &account, &reward_token)
    }

    pub fn staking_token(env: Env) -> Result<Address, ContractError> {
        storage::staking_token(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn nominated_owner(env: Env) -> Option<Address> {
        ownership::get_nominated(&env)
    }

    pub fn paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_manager(env: Env, account: Address) -> bool {
        managers::is_manager(&env, &account)
    }

    pub fn managers(env: Env) -> Vec<Address> {
        managers::list_managers(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Zero every nonzero owed balance of `staker` and return what was owed.
    /// Must run after the checkpoint for `tokens`.
    fn settle_owed(env: &Env, staker: &Address, tokens: &Vec<Address>) -> Vec<(Address, i128)> {
        let mut payouts = Vec::new(env);
        for token in tokens.iter() {
            let owed = accrual::owed(env, staker, &token);
            if owed > 0 {
                accrual::set_owed(env, staker, &token, 0);
                payouts.push_back((token, owed));
            }
        }
        payouts
    }

    /// Transfer settled rewards. Only nonzero amounts reach this point.
    fn pay_out(env: &Env, staker: &Address, payouts: &Vec<(Address, i128)>) {
        let contract = env.current_contract_address();
        for (token, amount) in payouts.iter() {
            token::Client::new(env, &token).transfer(&contract, staker, &amount);
            events::publish_reward_paid(env, staker.clone(), token, amount);
        }
    }

    /// Send `amount` stake tokens back to `staker` after the ledger debit.
    fn return_stake(
        env: &Env,
        staker: &Address,
        amount: i128,
        new_total: i128,
    ) -> Result<(), ContractError> {
        let stake_token = storage::staking_token(env)?;
        token::Client::new(env, &stake_token).transfer(
            &env.current_contract_address(),
            staker,
            &amount,
        );

        events::publish_withdrawn(env, staker.clone(), amount, new_total);

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
