use common::{managers, ownership, pause};
use soroban_sdk::{Address, Env};

use crate::channel;
use crate::errors::ContractError;

/// Permission a gated entry point demands of its caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// The contract owner.
    Owner,
    /// The owner or any registered manager.
    Manager,
    /// The distributor of the given reward token's channel.
    Distributor(Address),
    /// The account nominated as next owner.
    Nominee,
}

/// Guard: revert unless `caller` holds `role`.
///
/// Authentication (`require_auth`) is the entry point's job; this only
/// answers whether the authenticated caller is allowed.
pub fn require_role(env: &Env, caller: &Address, role: &Role) -> Result<(), ContractError> {
    match role {
        Role::Owner => {
            if !ownership::is_owner(env, caller) {
                return Err(ContractError::Unauthorized);
            }
        }
        Role::Manager => {
            if !ownership::is_owner(env, caller) && !managers::is_manager(env, caller) {
                return Err(ContractError::Unauthorized);
            }
        }
        Role::Distributor(token) => {
            let data = channel::load(env, token)?;
            if data.rewards_distributor != *caller {
                return Err(ContractError::NotDistributor);
            }
        }
        Role::Nominee => {
            if ownership::get_nominated(env).as_ref() != Some(caller) {
                return Err(ContractError::NotNominated);
            }
        }
    }
    Ok(())
}

/// Guard: revert while the contract is paused.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if pause::is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}
