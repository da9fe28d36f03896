use soroban_sdk::{Env, I256};

use crate::errors::ContractError;

/// Fixed-point scaling factor.
///
/// Reward-per-token values are multiplied by this constant before storage so
/// that sub-unit accrual survives integer division. The public
/// `reward_per_token` read is expressed in this scale.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Clamp accrual to the funded window: `min(now, period_finish)`.
pub fn last_time_reward_applicable(now: u64, period_finish: u64) -> u64 {
    if now < period_finish {
        now
    } else {
        period_finish
    }
}

/// Recompute a channel's `reward_per_token_stored` as of `applicable_until`.
///
/// ```text
/// Δrpt = (applicable_until − last_update) × reward_rate × PRECISION / total_staked
/// new_rpt = stored + Δrpt
/// ```
///
/// The accumulator lives in 256 bits: at 18-decimal amounts the product
/// `elapsed × rate × PRECISION` leaves the `i128` range within seconds, and a
/// small `total_staked` pushes the quotient past it as well.
///
/// When `total_staked` is zero the stored value is returned unchanged; no
/// stakers means nobody to distribute to.
///
/// # Arguments
/// * `stored`           – current `reward_per_token_stored` (scaled by PRECISION)
/// * `reward_rate`      – reward units emitted per second across all stakers
/// * `last_update`      – timestamp the accumulator was last advanced to
/// * `applicable_until` – `last_time_reward_applicable` for the channel
/// * `total_staked`     – sum of all active stakes
pub fn reward_per_token(
    env: &Env,
    stored: &I256,
    reward_rate: i128,
    last_update: u64,
    applicable_until: u64,
    total_staked: i128,
) -> I256 {
    if total_staked <= 0 {
        return stored.clone();
    }

    let elapsed = applicable_until.saturating_sub(last_update);
    let delta = I256::from_i128(env, elapsed as i128)
        .mul(&I256::from_i128(env, reward_rate))
        .mul(&I256::from_i128(env, PRECISION))
        .div(&I256::from_i128(env, total_staked));

    stored.add(&delta)
}

/// Total reward owed to an account for one channel.
///
/// ```text
/// earned = staked × (current_rpt − user_rpt_paid) / PRECISION + owed
/// ```
///
/// The product is taken in 256 bits and narrowed once divided; a result
/// outside `i128` is `MathOverflow`. Division truncates; this is the only
/// rounding step in the accrual path.
pub fn earned(
    env: &Env,
    staked: i128,
    current_rpt: &I256,
    user_rpt_paid: &I256,
    owed: i128,
) -> Result<i128, ContractError> {
    let accrued = I256::from_i128(env, staked)
        .mul(&current_rpt.sub(user_rpt_paid))
        .div(&I256::from_i128(env, PRECISION))
        .to_i128()
        .ok_or(ContractError::MathOverflow)?;

    owed.checked_add(accrued).ok_or(ContractError::MathOverflow)
}

// ── Funding ─────────────────────────────────────────────────────────────────

/// Rate for a funding notification.
///
/// A fresh period (`now >= period_finish`) pays `amount / duration`. A top-up
/// inside a running period rolls the unpaid remainder forward:
/// `(amount + (period_finish − now) × current_rate) / duration`.
/// The truncated remainder of the division is forfeited.
pub fn notified_rate(
    amount: i128,
    duration: u64,
    now: u64,
    period_finish: u64,
    current_rate: i128,
) -> Result<i128, ContractError> {
    if duration == 0 {
        return Err(ContractError::ZeroRewardsDuration);
    }

    let budget = if now >= period_finish {
        amount
    } else {
        let remaining = (period_finish - now) as i128;
        let leftover = remaining
            .checked_mul(current_rate)
            .ok_or(ContractError::MathOverflow)?;
        amount
            .checked_add(leftover)
            .ok_or(ContractError::MathOverflow)?
    };

    Ok(budget / duration as i128)
}

/// Guard: the rate must be payable from custody for a whole period.
pub fn check_solvency(rate: i128, custody: i128, duration: u64) -> Result<(), ContractError> {
    if duration == 0 {
        return Err(ContractError::ZeroRewardsDuration);
    }
    if rate > custody / duration as i128 {
        return Err(ContractError::RewardTooHigh);
    }
    Ok(())
}

/// Reward paid out over one full period at the current rate.
pub fn reward_for_duration(rate: i128, duration: u64) -> Result<i128, ContractError> {
    rate.checked_mul(duration as i128)
        .ok_or(ContractError::MathOverflow)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Math tests; `I256` needs an `Env` but no deployed contract.
