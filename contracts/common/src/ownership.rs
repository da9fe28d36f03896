use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const NOMINATED: Symbol = symbol_short!("NOMINATED");

// ── Owner ────────────────────────────────────────────────────────────────────

/// Records `owner` as the contract owner. Used once during initialization.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if the contract has been initialized.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns `true` when `caller` is the current owner.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

// ── Two-step transfer ────────────────────────────────────────────────────────

/// Stores `candidate` as the nominated next owner, replacing any earlier
/// nomination. Callers must verify the current owner beforehand.
pub fn nominate(env: &Env, candidate: &Address) {
    env.storage().instance().set(&NOMINATED, candidate);
}

/// Returns the pending nominee, if any.
pub fn get_nominated(env: &Env) -> Option<Address> {
    env.storage().instance().get(&NOMINATED)
}

/// Completes the transfer to `caller` if, and only if, `caller` is the
/// pending nominee. The nomination is consumed.
///
/// Returns the previous owner on success, `None` when `caller` was not
/// nominated (including when no nomination exists).
pub fn accept(env: &Env, caller: &Address) -> Option<Address> {
    let nominated = get_nominated(env)?;
    if nominated != *caller {
        return None;
    }
    let previous = get_owner(env)?;
    set_owner(env, caller);
    env.storage().instance().remove(&NOMINATED);
    Some(previous)
}
