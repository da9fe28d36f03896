use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::{TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const MANAGER_PREFIX: Symbol = symbol_short!("MANAGER");
const MANAGER_LIST: Symbol = symbol_short!("MGR_LIST");

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn manager_key(account: &Address) -> (Symbol, Address) {
    (MANAGER_PREFIX, account.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Grants the manager flag to `account` and tracks it in the manager list.
/// Callers must verify ownership beforehand.
///
/// Returns `false` if `account` already was a manager.
pub fn add_manager(env: &Env, account: &Address) -> bool {
    if is_manager(env, account) {
        return false;
    }
    let key = manager_key(account);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);

    let mut list = list_managers(env);
    list.push_back(account.clone());
    env.storage().persistent().set(&MANAGER_LIST, &list);
    true
}

/// Revokes the manager flag from `account`.
///
/// Returns `false` if `account` was not a manager.
pub fn remove_manager(env: &Env, account: &Address) -> bool {
    if !is_manager(env, account) {
        return false;
    }
    env.storage().persistent().remove(&manager_key(account));

    let list = list_managers(env);
    let mut kept = Vec::new(env);
    for a in list.iter() {
        if a != *account {
            kept.push_back(a);
        }
    }
    env.storage().persistent().set(&MANAGER_LIST, &kept);
    true
}

/// Returns whether `account` currently holds the manager flag.
pub fn is_manager(env: &Env, account: &Address) -> bool {
    let key = manager_key(account);
    let flagged: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if flagged {
        extend_ttl(env, &key);
    }
    flagged
}

/// Returns every current manager in the order they were added.
pub fn list_managers(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&MANAGER_LIST)
        .unwrap_or(Vec::new(env))
}
