use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const CONFIG_KEY: &str = "Config";

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SubStrategyConfig {
    pub router: Address,             // Dynamic LP strategy allowed to drive this adapter
    pub strategy_token_in: Address,  // Token staked in the farm
    pub strategy_token_out: Address, // Token returned to the router
    pub oracle: Address,             // SEP-40 feed pricing strategy_token_in
    pub farm: Address,
    pub pool_id: u32,
    pub reward_token: Address,
    pub swap_router: Address, // Converts rewards and wraps token_out into token_in
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_config(e: &Env) -> SubStrategyConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

pub fn set_config(e: &Env, config: &SubStrategyConfig) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, CONFIG_KEY), config);
}
