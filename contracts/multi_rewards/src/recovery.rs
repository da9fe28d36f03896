use soroban_sdk::{Address, Env};

use crate::channel;
use crate::errors::ContractError;
use crate::storage;

/// Guard for the owner's stray-token recovery path.
///
/// The staking token is never recoverable. A reward token is recoverable only
/// once its channel's period has finished. Any other token passes.
pub fn ensure_recoverable(env: &Env, token: &Address) -> Result<(), ContractError> {
    if *token == storage::staking_token(env)? {
        return Err(ContractError::RecoveryForbidden);
    }

    if channel::exists(env, token) {
        let data = channel::load(env, token)?;
        if data.is_active(env.ledger().timestamp()) {
            return Err(ContractError::RecoveryForbidden);
        }
    }

    Ok(())
}
