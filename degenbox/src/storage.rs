use soroban_sdk::{contracttype, Address, Env};
use strategy_common::{StrategyData, Totals};

// Persistent storage keys
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum DataKey {
    Totals(Address),                 // Stores Totals per token
    StrategyData(Address),           // Stores StrategyData per token
    Strategy(Address),               // Active strategy per token
    PendingStrategy(Address),        // Queued strategy per token
    Shares(Address, Address),        // (token, owner) -> shares
}

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

fn get_shared<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(e: &Env, key: &DataKey) -> Option<V> {
    let value = e.storage().persistent().get::<DataKey, V>(key);
    if value.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    value
}

fn set_shared<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(e: &Env, key: &DataKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn get_totals(e: &Env, token: &Address) -> Totals {
    get_shared(e, &DataKey::Totals(token.clone())).unwrap_or(Totals {
        elastic: 0,
        base: 0,
    })
}

pub fn set_totals(e: &Env, token: &Address, totals: &Totals) {
    set_shared(e, &DataKey::Totals(token.clone()), totals);
}

pub fn get_strategy_data(e: &Env, token: &Address) -> StrategyData {
    get_shared(e, &DataKey::StrategyData(token.clone())).unwrap_or(StrategyData {
        strategy_start_date: 0,
        target_percentage: 0,
        balance: 0,
    })
}

pub fn set_strategy_data(e: &Env, token: &Address, data: &StrategyData) {
    set_shared(e, &DataKey::StrategyData(token.clone()), data);
}

pub fn get_strategy(e: &Env, token: &Address) -> Option<Address> {
    get_shared(e, &DataKey::Strategy(token.clone()))
}

pub fn set_strategy(e: &Env, token: &Address, strategy: &Address) {
    set_shared(e, &DataKey::Strategy(token.clone()), strategy);
}

pub fn get_pending_strategy(e: &Env, token: &Address) -> Option<Address> {
    get_shared(e, &DataKey::PendingStrategy(token.clone()))
}

pub fn set_pending_strategy(e: &Env, token: &Address, strategy: &Address) {
    set_shared(e, &DataKey::PendingStrategy(token.clone()), strategy);
}

pub fn remove_pending_strategy(e: &Env, token: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::PendingStrategy(token.clone()));
}

pub fn get_shares(e: &Env, token: &Address, owner: &Address) -> i128 {
    let key = DataKey::Shares(token.clone(), owner.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(shares) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
            shares
        }
        None => 0,
    }
}

pub fn set_shares(e: &Env, token: &Address, owner: &Address, shares: i128) {
    let key = DataKey::Shares(token.clone(), owner.clone());
    if shares == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}
