use degenbox::{DegenBoxContract, DegenBoxContractClient};
use dynamic_lp_strategy::{DynamicLpStrategy, DynamicLpStrategyClient};
use dynamic_sub_lp_strategy::{DynamicSubLpStrategy, DynamicSubLpStrategyClient, SubStrategyConfig};
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{vec as svec, Address, Env, Symbol};
use strategy::{BridgeSource, FarmSource, LendingSource, StrategyContract, StrategyContractClient, YieldSource};
use strategy_common::constants::STRATEGY_DELAY;

use crate::mocks::bridge::{MockBridge, MockBridgeClient};
use crate::mocks::farm::{MockFarm, MockFarmClient};
use crate::mocks::lending_pool::{MockLendingPool, MockLendingPoolClient};
use crate::mocks::swap_router::{MockSwapRouter, MockSwapRouterClient};
use crate::SCALAR_7;

pub struct TestFixture<'a> {
    pub env: Env,
    pub owner: Address,
    pub executor: Address,
    pub fee_collector: Address,
    pub users: Vec<Address>,
    pub degenbox: DegenBoxContractClient<'a>,
    pub oracle: MockPriceOracleClient<'a>,
    pub swap_router: MockSwapRouterClient<'a>,
    pub token: TokenClient<'a>,        // LP token managed by the strategies
    pub reward_token: TokenClient<'a>, // Paid by farms and lending pools
    pub receipt_token: TokenClient<'a>, // Minted by the bridge
    pub plp_token: TokenClient<'a>,    // Wrapped LP token staked by a sub-strategy
}

pub struct DynamicLpSetup<'a> {
    pub router: DynamicLpStrategyClient<'a>,
    pub farm: MockFarmClient<'a>,
    pub lp_sub: DynamicSubLpStrategyClient<'a>,
    pub plp_sub: DynamicSubLpStrategyClient<'a>,
}

impl<'a> TestFixture<'a> {
    pub fn create() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();
        e.ledger().set_min_temp_entry_ttl(17280);
        e.ledger().set_min_persistent_entry_ttl(2073600);

        let owner = Address::generate(&e);
        let executor = Address::generate(&e);
        let fee_collector = Address::generate(&e);
        let users = vec![Address::generate(&e), Address::generate(&e)];

        let token = e.register_stellar_asset_contract_v2(owner.clone()).address();
        let reward_token = e.register_stellar_asset_contract_v2(owner.clone()).address();
        let receipt_token = e.register_stellar_asset_contract_v2(owner.clone()).address();
        let plp_token = e.register_stellar_asset_contract_v2(owner.clone()).address();

        let oracle_id = e.register(MockPriceOracleWASM, ());
        let oracle = MockPriceOracleClient::new(&e, &oracle_id);
        oracle.set_data(
            &owner,
            &Asset::Other(Symbol::new(&e, "USD")),
            &svec![
                &e,
                Asset::Stellar(token.clone()),
                Asset::Stellar(receipt_token.clone()),
                Asset::Stellar(plp_token.clone()),
            ],
            &7,
            &300,
        );
        oracle.set_price_stable(&svec![&e, 1_0000000, 1_0000000, 2_0000000]);

        let swap_router_id = e.register(MockSwapRouter, ());
        let swap_router = MockSwapRouterClient::new(&e, &swap_router_id);

        let degenbox_id = e.register(DegenBoxContract, (owner.clone(),));
        let degenbox = DegenBoxContractClient::new(&e, &degenbox_id);

        let fixture = TestFixture {
            env: e.clone(),
            owner,
            executor,
            fee_collector,
            users,
            degenbox,
            oracle,
            swap_router,
            token: TokenClient::new(&e, &token),
            reward_token: TokenClient::new(&e, &reward_token),
            receipt_token: TokenClient::new(&e, &receipt_token),
            plp_token: TokenClient::new(&e, &plp_token),
        };

        // reward -> LP at 0.5, LP <-> PLP at 2 LP per PLP minus 0.3%
        fixture.swap_router.set_rate(&reward_token, &token, &0_5000000);
        fixture.swap_router.set_rate(&token, &plp_token, &0_4985000);
        fixture.swap_router.set_rate(&plp_token, &token, &1_9940000);
        fixture.mint(&token, &swap_router_id, 10_000_000 * SCALAR_7);
        fixture.mint(&plp_token, &swap_router_id, 10_000_000 * SCALAR_7);
        fixture
    }

    pub fn mint(&self, token: &Address, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, token).mint(to, &amount);
    }

    /// Oracle prices of the LP, receipt and PLP tokens, 7 decimals
    pub fn set_prices(&self, token_price: i128, receipt_price: i128, plp_price: i128) {
        self.oracle
            .set_price_stable(&svec![&self.env, token_price, receipt_price, plp_price]);
    }

    /// Mint `amount` LP tokens to `user` and deposit them in the ledger
    pub fn deposit(&self, user: &Address, amount: i128) -> i128 {
        self.mint(&self.token.address, user, amount);
        self.degenbox.deposit(user, &self.token.address, &amount)
    }

    /// Queue `strategy`, wait out the delay and confirm it
    pub fn activate_strategy(&self, strategy: &Address) {
        self.degenbox.set_strategy(&self.token.address, strategy);
        self.jump(STRATEGY_DELAY + 1);
        self.degenbox.set_strategy(&self.token.address, strategy);
    }

    pub fn set_target(&self, target_percentage: u32) {
        self.degenbox
            .set_strategy_target_percentage(&self.token.address, &target_percentage);
    }

    pub fn deploy_farm_strategy(&self) -> (StrategyContractClient<'a>, MockFarmClient<'a>) {
        let farm_id = self.env.register(MockFarm, (self.reward_token.address.clone(),));
        let farm = MockFarmClient::new(&self.env, &farm_id);
        farm.add_pool(&0, &self.token.address);

        let source = YieldSource::Farm(FarmSource {
            farm: farm_id,
            pool_id: 0,
            reward_token: self.reward_token.address.clone(),
            swap_router: self.swap_router.address.clone(),
        });
        (self.deploy_strategy(source), farm)
    }

    pub fn deploy_lending_strategy(&self) -> (StrategyContractClient<'a>, MockLendingPoolClient<'a>) {
        let pool_id = self.env.register(
            MockLendingPool,
            (self.token.address.clone(), self.reward_token.address.clone()),
        );
        let pool = MockLendingPoolClient::new(&self.env, &pool_id);

        let source = YieldSource::Lending(LendingSource {
            pool: pool_id,
            reward_token: self.reward_token.address.clone(),
            swap_router: self.swap_router.address.clone(),
        });
        (self.deploy_strategy(source), pool)
    }

    pub fn deploy_bridge_strategy(&self) -> (StrategyContractClient<'a>, MockBridgeClient<'a>) {
        let bridge_id = self.env.register(
            MockBridge,
            (self.token.address.clone(), self.receipt_token.address.clone()),
        );
        StellarAssetClient::new(&self.env, &self.receipt_token.address).set_admin(&bridge_id);
        let bridge = MockBridgeClient::new(&self.env, &bridge_id);

        let source = YieldSource::Bridge(BridgeSource {
            bridge: bridge_id,
            receipt_token: self.receipt_token.address.clone(),
            oracle: self.oracle.address.clone(),
        });
        (self.deploy_strategy(source), bridge)
    }

    /// Router over two sub-strategies sharing a farm: pool 0 stakes the LP
    /// token as is, pool 1 stakes it wrapped into PLP
    pub fn deploy_dynamic_lp(&self) -> DynamicLpSetup<'a> {
        let router_id = self.env.register(
            DynamicLpStrategy,
            (
                self.owner.clone(),
                self.degenbox.address.clone(),
                self.token.address.clone(),
                self.executor.clone(),
            ),
        );
        let router = DynamicLpStrategyClient::new(&self.env, &router_id);

        let farm_id = self.env.register(MockFarm, (self.reward_token.address.clone(),));
        let farm = MockFarmClient::new(&self.env, &farm_id);
        farm.add_pool(&0, &self.token.address);
        farm.add_pool(&1, &self.plp_token.address);

        let lp_sub = self.deploy_sub_strategy(&router_id, &farm_id, 0, &self.token.address);
        let plp_sub = self.deploy_sub_strategy(&router_id, &farm_id, 1, &self.plp_token.address);
        router.add_sub_strategy(&lp_sub.address);
        router.add_sub_strategy(&plp_sub.address);

        DynamicLpSetup {
            router,
            farm,
            lp_sub,
            plp_sub,
        }
    }

    fn deploy_strategy(&self, source: YieldSource) -> StrategyContractClient<'a> {
        let strategy_id = self.env.register(
            StrategyContract,
            (
                self.owner.clone(),
                self.degenbox.address.clone(),
                self.token.address.clone(),
                self.executor.clone(),
                source,
            ),
        );
        StrategyContractClient::new(&self.env, &strategy_id)
    }

    fn deploy_sub_strategy(
        &self,
        router: &Address,
        farm: &Address,
        pool_id: u32,
        token_in: &Address,
    ) -> DynamicSubLpStrategyClient<'a> {
        let config = SubStrategyConfig {
            router: router.clone(),
            strategy_token_in: token_in.clone(),
            strategy_token_out: self.token.address.clone(),
            oracle: self.oracle.address.clone(),
            farm: farm.clone(),
            pool_id,
            reward_token: self.reward_token.address.clone(),
            swap_router: self.swap_router.address.clone(),
        };
        let sub_id = self.env.register(DynamicSubLpStrategy, (self.owner.clone(), config));
        DynamicSubLpStrategyClient::new(&self.env, &sub_id)
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: self.env.ledger().protocol_version(),
            sequence_number: self.env.ledger().sequence(),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 999999,
            min_persistent_entry_ttl: 999999,
            max_entry_ttl: 9999999,
        });
    }
}
