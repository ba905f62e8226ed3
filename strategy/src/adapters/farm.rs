use soroban_sdk::Env;
use strategy_common::{dependencies::FarmClient, storage, swap};

use crate::types::FarmSource;

pub fn skim(e: &Env, source: &FarmSource, amount: i128) {
    swap::authorize_transfer(e, &storage::get_strategy_token(e), &source.farm, amount);
    FarmClient::new(e, &source.farm).deposit(&e.current_contract_address(), &source.pool_id, &amount);
}

/// Staked principal never changes, yield is paid in the reward token
pub fn harvest(e: &Env, source: &FarmSource) -> i128 {
    claim(e, source);
    0
}

pub fn withdraw(e: &Env, source: &FarmSource, amount: i128) {
    FarmClient::new(e, &source.farm).withdraw(&e.current_contract_address(), &source.pool_id, &amount);
}

pub fn exit(e: &Env, source: &FarmSource) {
    FarmClient::new(e, &source.farm).emergency_withdraw(&e.current_contract_address(), &source.pool_id);
}

pub fn claim(e: &Env, source: &FarmSource) {
    FarmClient::new(e, &source.farm).withdraw(&e.current_contract_address(), &source.pool_id, &0);
}

pub fn position(e: &Env, source: &FarmSource) -> i128 {
    FarmClient::new(e, &source.farm).user_info(&source.pool_id, &e.current_contract_address())
}
