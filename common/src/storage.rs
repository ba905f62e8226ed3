use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

use crate::types::{FeeParameters, StrategyStatus};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

/********** Storage Types **********/

const VAULT_KEY: &str = "Vault";
const STRATEGY_TOKEN_KEY: &str = "StratToken";
const MAX_BALANCE_KEY: &str = "MaxBalance";
const STATUS_KEY: &str = "Status";
const FEE_PARAMS_KEY: &str = "FeeParams";

#[derive(Clone)]
#[contracttype]
pub enum StrategyDataKey {
    // Whether an address may call safe_harvest and the swap entry points
    Executor(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Binding **********/

pub fn get_vault(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, VAULT_KEY))
        .unwrap_optimized()
}

pub fn set_vault(e: &Env, vault: &Address) {
    e.storage().instance().set(&Symbol::new(e, VAULT_KEY), vault);
}

pub fn get_strategy_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, STRATEGY_TOKEN_KEY))
        .unwrap_optimized()
}

pub fn set_strategy_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, STRATEGY_TOKEN_KEY), token);
}

/********** Harvest State **********/

/// Fetch the elastic cap above which harvests are skipped. Defaults to no cap.
pub fn get_max_balance(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MAX_BALANCE_KEY))
        .unwrap_or(i128::MAX)
}

pub fn set_max_balance(e: &Env, max_balance: i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, MAX_BALANCE_KEY), &max_balance);
}

pub fn get_status(e: &Env) -> StrategyStatus {
    e.storage()
        .instance()
        .get(&Symbol::new(e, STATUS_KEY))
        .unwrap_optimized()
}

pub fn set_status(e: &Env, status: StrategyStatus) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, STATUS_KEY), &status);
}

/********** Fees **********/

pub fn get_fee_parameters(e: &Env) -> FeeParameters {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FEE_PARAMS_KEY))
        .unwrap_optimized()
}

pub fn set_fee_parameters(e: &Env, params: &FeeParameters) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, FEE_PARAMS_KEY), params);
}

/********** Executors **********/

pub fn is_executor(e: &Env, executor: &Address) -> bool {
    let key = StrategyDataKey::Executor(executor.clone());
    match e.storage().persistent().get::<StrategyDataKey, bool>(&key) {
        Some(allowed) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
            allowed
        }
        None => false,
    }
}

pub fn set_executor(e: &Env, executor: &Address, allowed: bool) {
    let key = StrategyDataKey::Executor(executor.clone());
    if allowed {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    } else {
        e.storage().persistent().remove(&key);
    }
}
