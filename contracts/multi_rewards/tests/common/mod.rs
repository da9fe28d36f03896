#![allow(dead_code)]

use multi_rewards::{MultiRewardsContract, MultiRewardsContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

pub const START: u64 = 1_000;

pub struct TestContext {
    pub env: Env,
    pub client: MultiRewardsContractClient<'static>,
    pub owner: Address,
    pub stake_token: Address,
}

/// A registered reward channel and the account funding it.
pub struct Channel {
    pub token: Address,
    pub distributor: Address,
}

/// Creates a mocked Soroban environment, deploys the contract with a fresh
/// SAC stake token and sets the clock to [`START`].
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let stake_token = create_token(&env);

    let contract_id = env.register(MultiRewardsContract, ());
    let client = MultiRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &stake_token);

    TestContext {
        env,
        client,
        owner,
        stake_token,
    }
}

pub fn create_token(env: &Env) -> Address {
    env.register_stellar_asset_contract_v2(Address::generate(env))
        .address()
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, account: &Address) -> i128 {
    TokenClient::new(env, token).balance(account)
}

pub fn advance(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

/// Registers a new reward channel whose distributor holds `budget` tokens.
pub fn add_channel(ctx: &TestContext, duration: u64, budget: i128) -> Channel {
    let token = create_token(&ctx.env);
    let distributor = Address::generate(&ctx.env);
    mint(&ctx.env, &token, &distributor, budget);
    ctx.client
        .add_reward(&ctx.owner, &token, &distributor, &duration);
    Channel { token, distributor }
}

pub fn fund(ctx: &TestContext, channel: &Channel, amount: i128) {
    ctx.client
        .notify_reward_amount(&channel.distributor, &channel.token, &amount);
}

/// Creates an account holding `amount` stake tokens, optionally staking them.
pub fn create_staker(ctx: &TestContext, amount: i128, stake: bool) -> Address {
    let staker = Address::generate(&ctx.env);
    mint(&ctx.env, &ctx.stake_token, &staker, amount);
    if stake {
        ctx.client.stake(&staker, &amount);
    }
    staker
}
