#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use multi_rewards::{MultiRewardsContract, MultiRewardsContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

const USERS: usize = 4;
// 18-decimal wallets; fuzzed amounts are scaled so funding reaches 10^28.
const WALLET: i128 = 1_000_000_000_000_000_000_000_000_000_000;
const SCALE: i128 = 1_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { user: u8, amount: u64 },
    Withdraw { user: u8, amount: u64 },
    Claim { user: u8 },
    Exit { user: u8 },
    Fund { channel: bool, amount: u64 },
    SetDuration { channel: bool, duration: u32 },
    Recover { channel: bool, amount: u64 },
    Advance { seconds: u16 },
    TogglePause,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let owner = Address::generate(&env);
    let stake_token = env
        .register_stellar_asset_contract_v2(owner.clone())
        .address();

    let contract_id = env.register(MultiRewardsContract, ());
    let client = MultiRewardsContractClient::new(&env, &contract_id);
    client.initialize(&owner, &stake_token);

    let distributor = Address::generate(&env);
    let mut channels = Vec::new();
    for duration in [60u64, 3_600] {
        let token = env
            .register_stellar_asset_contract_v2(owner.clone())
            .address();
        StellarAssetClient::new(&env, &token).mint(&distributor, &WALLET);
        client.add_reward(&owner, &token, &distributor, &duration);
        channels.push(token);
    }

    let users: Vec<Address> = (0..USERS)
        .map(|_| {
            let user = Address::generate(&env);
            StellarAssetClient::new(&env, &stake_token).mint(&user, &WALLET);
            user
        })
        .collect();

    let mut paused = false;
    let mut recovered = false;
    for action in actions {
        match action {
            FuzzAction::Stake { user, amount } => {
                let _ = client.try_stake(&users[user as usize % USERS], &(amount as i128 * SCALE));
            }
            FuzzAction::Withdraw { user, amount } => {
                let user = &users[user as usize % USERS];
                let amount = amount as i128 * SCALE;
                let staked = client.staked_balance_of(user);
                let result = client.try_withdraw(user, &amount);
                if !recovered {
                    assert_eq!(result.is_ok(), amount > 0 && amount <= staked);
                }
            }
            FuzzAction::Claim { user } => {
                let _ = client.try_get_reward(&users[user as usize % USERS]);
            }
            FuzzAction::Exit { user } => {
                let user = &users[user as usize % USERS];
                let staked = client.staked_balance_of(user);
                let result = client.try_exit(user);
                if !recovered {
                    assert_eq!(result.is_ok(), staked > 0);
                }
            }
            FuzzAction::Fund { channel, amount } => {
                let token = &channels[channel as usize];
                let amount = amount as i128 * SCALE;
                let _ = client.try_notify_reward_amount(&distributor, token, &amount);
            }
            FuzzAction::SetDuration { channel, duration } => {
                let token = &channels[channel as usize];
                let _ = client.try_set_rewards_duration(&owner, token, &(duration as u64));
            }
            FuzzAction::Recover { channel, amount } => {
                let token = &channels[channel as usize];
                let amount = amount as i128 * SCALE;
                recovered |= client
                    .try_recover_foreign_asset(&owner, token, &amount)
                    .is_ok();
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
            FuzzAction::TogglePause => {
                paused = !paused;
                let _ = client.try_set_paused(&owner, &paused);
            }
        }

        // Stake ledger stays consistent with custody.
        let staked: i128 = users.iter().map(|u| client.staked_balance_of(u)).sum();
        assert_eq!(client.total_staked(), staked);
        assert_eq!(
            TokenClient::new(&env, &stake_token).balance(&contract_id),
            staked
        );

        // Views stay readable whatever the interleaving.
        for token in channels.iter() {
            assert!(client.try_reward_per_token(token).is_ok());
            for user in users.iter() {
                assert!(client.try_earned(user, token).is_ok());
            }
        }
    }
});
