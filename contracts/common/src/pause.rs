use soroban_sdk::{symbol_short, Env, Symbol};

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Returns whether the contract is paused. An unset flag reads as `false`.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Sets the pause flag and reports whether the value actually changed.
///
/// Setting the flag to its current value is a no-op returning `false`, so
/// callers can publish a state-change event only on a real transition.
pub fn set_paused(env: &Env, paused: bool) -> bool {
    if is_paused(env) == paused {
        return false;
    }
    env.storage().instance().set(&PAUSED, &paused);
    true
}
