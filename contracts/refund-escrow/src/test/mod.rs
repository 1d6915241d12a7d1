pub mod refund_test;

use crate::{EscrowConfig, RefundEscrow, RefundEscrowClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

pub const INITIAL_BALANCE: i128 = 10_000;

pub struct TestContext {
    pub env: Env,
    pub client: RefundEscrowClient<'static>,
    pub primary: Address,
    pub beneficiary: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl TestContext {
    /// Generate an investor, fund them and whitelist them for `amount`.
    pub fn whitelisted_investor(&self, amount: u128) -> Address {
        let investor = Address::generate(&self.env);
        self.token_admin.mint(&investor, &INITIAL_BALANCE);
        self.client.add_to_whitelist(&self.primary, &investor, &amount);
        investor
    }

    pub fn sum_of_deposits(&self) -> u128 {
        let mut sum = 0u128;
        for investor in self.client.investors().iter() {
            sum += self.client.deposits_of(&investor);
        }
        sum
    }
}

pub fn setup_test() -> TestContext {
    setup_with_config(EscrowConfig {
        zero_deposits_on_refund: true,
    })
}

pub fn setup_with_config(config: EscrowConfig) -> TestContext {
    let (env, client) = setup_uninitialized();

    let primary = Address::generate(&env);
    let beneficiary = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    client.initialize(&primary, &beneficiary, &token_contract.address(), &config);

    TestContext {
        env,
        client,
        primary,
        beneficiary,
        token,
        token_admin,
    }
}

pub fn setup_uninitialized() -> (Env, RefundEscrowClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(RefundEscrow, ());
    let client = RefundEscrowClient::new(&env, &contract_id);

    (env, client)
}
