extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env, Symbol, TryIntoVal,
};

use crate::{ContractError, ErrorCategory, MultiRewardsContract, MultiRewardsContractClient};

fn setup() -> (Env, MultiRewardsContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(MultiRewardsContract, ());
    let client = MultiRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_token);

    (env, client, owner, stake_token)
}

fn count_events(env: &Env, topic: Symbol) -> u32 {
    let mut n = 0;
    for (_contract, topics, _data) in env.events().all().iter() {
        if let Some(first) = topics.get(0) {
            let head: Result<Symbol, _> = first.try_into_val(env);
            if head.map(|s| s == topic).unwrap_or(false) {
                n += 1;
            }
        }
    }
    n
}

// ── Ownership ────────────────────────────────────────────────────────────────

#[test]
fn test_nominate_and_accept_ownership() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);

    client.nominate_new_owner(&owner, &successor);
    assert_eq!(client.nominated_owner(), Some(successor.clone()));
    // Nothing changes until the nominee accepts.
    assert_eq!(client.owner(), owner);

    client.accept_ownership(&successor);
    assert_eq!(client.owner(), successor);
    assert_eq!(client.nominated_owner(), None);
}

#[test]
fn test_accept_without_nomination_fails() {
    let (env, client, _, _) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_accept_ownership(&stranger);
    match result {
        Err(Ok(e)) => {
            assert_eq!(e, ContractError::NotNominated);
            assert_eq!(e.category(), ErrorCategory::Authorization);
        }
        _ => unreachable!("Expected NotNominated error"),
    }
}

#[test]
fn test_accept_by_wrong_account_fails() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);
    let impostor = Address::generate(&env);

    client.nominate_new_owner(&owner, &successor);

    let result = client.try_accept_ownership(&impostor);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotNominated),
        _ => unreachable!("Expected NotNominated error"),
    }
    assert_eq!(client.owner(), owner);
}

#[test]
fn test_renomination_replaces_candidate() {
    let (env, client, owner, _) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.nominate_new_owner(&owner, &first);
    client.nominate_new_owner(&owner, &second);

    let result = client.try_accept_ownership(&first);
    assert!(result.is_err());

    client.accept_ownership(&second);
    assert_eq!(client.owner(), second);
}

#[test]
fn test_old_owner_loses_rights_after_transfer() {
    let (env, client, owner, _) = setup();
    let successor = Address::generate(&env);

    client.nominate_new_owner(&owner, &successor);
    client.accept_ownership(&successor);

    let result = client.try_set_paused(&owner, &true);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    client.set_paused(&successor, &true);
    assert!(client.paused());
}

#[test]
fn test_non_owner_cannot_nominate() {
    let (env, client, _, _) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_nominate_new_owner(&stranger, &stranger);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.nominated_owner(), None);
}

// ── Owner-only surface ───────────────────────────────────────────────────────

#[test]
fn test_non_owner_cannot_administer_channels() {
    let (env, client, owner, _) = setup();
    let stranger = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    match client.try_add_reward(&stranger, &reward_token, &stranger, &60) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    client.add_reward(&owner, &reward_token, &owner, &60);

    match client.try_set_rewards_distributor(&stranger, &reward_token, &stranger) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match client.try_set_rewards_duration(&stranger, &reward_token, &120) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_set_distributor_on_unknown_token_fails() {
    let (env, client, owner, _) = setup();
    let unknown = Address::generate(&env);

    let result = client.try_set_rewards_distributor(&owner, &unknown, &owner);
    match result {
        Err(Ok(e)) => {
            assert_eq!(e, ContractError::RewardNotFound);
            assert_eq!(e.category(), ErrorCategory::NotFound);
        }
        _ => unreachable!("Expected RewardNotFound error"),
    }
}

// ── Pause ────────────────────────────────────────────────────────────────────

#[test]
fn test_pause_toggles_flag() {
    let (_env, client, owner, _) = setup();

    assert!(!client.paused());
    client.set_paused(&owner, &true);
    assert!(client.paused());
    client.set_paused(&owner, &false);
    assert!(!client.paused());
}

#[test]
fn test_pause_event_fires_on_change() {
    let (env, client, owner, _) = setup();

    client.set_paused(&owner, &true);
    assert_eq!(count_events(&env, symbol_short!("PAUSE_CHG")), 1);
}

#[test]
fn test_pause_noop_is_silent() {
    let (env, client, owner, _) = setup();

    // Already unpaused.
    client.set_paused(&owner, &false);
    assert_eq!(count_events(&env, symbol_short!("PAUSE_CHG")), 0);
    assert!(!client.paused());
}

#[test]
fn test_repeated_pause_emits_at_most_once() {
    let (env, client, owner, _) = setup();

    client.set_paused(&owner, &true);
    client.set_paused(&owner, &true);
    assert!(count_events(&env, symbol_short!("PAUSE_CHG")) <= 1);
    assert!(client.paused());
}

#[test]
fn test_non_owner_cannot_pause() {
    let (env, client, _, _) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_set_paused(&stranger, &true);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!client.paused());
}

#[test]
fn test_pause_does_not_block_exit() {
    let (env, client, owner, stake_token) = setup();
    let staker = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&staker, &1_000);
    client.stake(&staker, &1_000);

    client.set_paused(&owner, &true);
    client.exit(&staker);
    assert_eq!(client.total_staked(), 0);
}

// ── Managers ─────────────────────────────────────────────────────────────────

#[test]
fn test_set_and_remove_managers() {
    let (env, client, owner, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.set_managers(&owner, &vec![&env, alice.clone(), bob.clone()]);
    assert!(client.is_manager(&alice));
    assert!(client.is_manager(&bob));
    assert_eq!(client.managers().len(), 2);

    client.remove_managers(&owner, &vec![&env, alice.clone()]);
    assert!(!client.is_manager(&alice));
    assert!(client.is_manager(&bob));
    assert_eq!(client.managers(), vec![&env, bob]);
}

#[test]
fn test_set_managers_is_idempotent() {
    let (env, client, owner, _) = setup();
    let alice = Address::generate(&env);

    client.set_managers(&owner, &vec![&env, alice.clone()]);
    client.set_managers(&owner, &vec![&env, alice.clone()]);
    assert_eq!(client.managers().len(), 1);

    // Removing an account that is not a manager is a no-op.
    let stranger = Address::generate(&env);
    client.remove_managers(&owner, &vec![&env, stranger]);
    assert_eq!(client.managers().len(), 1);
}

#[test]
fn test_manager_can_set_duration() {
    let (env, client, owner, _) = setup();
    let manager = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    client.add_reward(&owner, &reward_token, &owner, &60);
    client.set_managers(&owner, &vec![&env, manager.clone()]);

    client.set_rewards_duration(&manager, &reward_token, &3_600);
    assert_eq!(client.reward_data(&reward_token).rewards_duration, 3_600);

    // Managers do not inherit the rest of the owner surface.
    let result = client.try_set_paused(&manager, &true);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_removed_manager_loses_duration_right() {
    let (env, client, owner, _) = setup();
    let manager = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    client.add_reward(&owner, &reward_token, &owner, &60);
    client.set_managers(&owner, &vec![&env, manager.clone()]);
    client.remove_managers(&owner, &vec![&env, manager.clone()]);

    let result = client.try_set_rewards_duration(&manager, &reward_token, &3_600);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_non_owner_cannot_set_managers() {
    let (env, client, _, _) = setup();
    let stranger = Address::generate(&env);

    let result = client.try_set_managers(&stranger, &vec![&env, stranger.clone()]);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!client.is_manager(&stranger));
}
