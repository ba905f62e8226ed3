use soroban_sdk::Env;
use strategy_common::{dependencies::LendingPoolClient, storage, swap};

use crate::types::LendingSource;

pub fn skim(e: &Env, source: &LendingSource, amount: i128) {
    swap::authorize_transfer(e, &storage::get_strategy_token(e), &source.pool, amount);
    LendingPoolClient::new(e, &source.pool).supply(&e.current_contract_address(), &amount);
}

/// Withdraws accrued interest so it can be sent to the vault
pub fn harvest(e: &Env, source: &LendingSource, balance: i128) -> i128 {
    let pool = LendingPoolClient::new(e, &source.pool);
    let this = e.current_contract_address();
    let current = pool.balance(&this);
    if current > balance {
        let profit = current - balance;
        pool.withdraw(&this, &profit);
        profit
    } else {
        current - balance
    }
}

pub fn withdraw(e: &Env, source: &LendingSource, amount: i128) {
    LendingPoolClient::new(e, &source.pool).withdraw(&e.current_contract_address(), &amount);
}

pub fn exit(e: &Env, source: &LendingSource) {
    let pool = LendingPoolClient::new(e, &source.pool);
    let this = e.current_contract_address();
    let balance = pool.balance(&this);
    if balance > 0 {
        pool.withdraw(&this, &balance);
    }
}

pub fn claim(e: &Env, source: &LendingSource) {
    LendingPoolClient::new(e, &source.pool).claim_rewards(&e.current_contract_address());
}

pub fn position(e: &Env, source: &LendingSource) -> i128 {
    LendingPoolClient::new(e, &source.pool).balance(&e.current_contract_address())
}
