use soroban_sdk::{panic_with_error, vec, Address, Env};
use strategy_common::{base::YieldAdapter, storage as common_storage, swap, StrategyError};

use crate::types::YieldSource;

pub mod bridge;
mod farm;
mod lending;

impl YieldAdapter for YieldSource {
    fn skim(&self, e: &Env, amount: i128) {
        match self {
            YieldSource::Farm(source) => farm::skim(e, source, amount),
            YieldSource::Lending(source) => lending::skim(e, source, amount),
            YieldSource::Bridge(source) => bridge::skim(e, source, amount),
        }
    }

    fn harvest(&self, e: &Env, balance: i128) -> i128 {
        match self {
            YieldSource::Farm(source) => farm::harvest(e, source),
            YieldSource::Lending(source) => lending::harvest(e, source, balance),
            YieldSource::Bridge(source) => bridge::harvest(e, source, balance),
        }
    }

    fn withdraw(&self, e: &Env, amount: i128) {
        match self {
            YieldSource::Farm(source) => farm::withdraw(e, source, amount),
            YieldSource::Lending(source) => lending::withdraw(e, source, amount),
            YieldSource::Bridge(source) => bridge::withdraw(e, source, amount),
        }
    }

    fn exit(&self, e: &Env) {
        match self {
            YieldSource::Farm(source) => farm::exit(e, source),
            YieldSource::Lending(source) => lending::exit(e, source),
            YieldSource::Bridge(source) => bridge::exit(e, source),
        }
    }

    fn position(&self, e: &Env) -> i128 {
        match self {
            YieldSource::Farm(source) => farm::position(e, source),
            YieldSource::Lending(source) => lending::position(e, source),
            YieldSource::Bridge(source) => bridge::position(e, source),
        }
    }

    fn harvest_rewards(&self, e: &Env) {
        match self {
            YieldSource::Farm(source) => farm::claim(e, source),
            YieldSource::Lending(source) => lending::claim(e, source),
            YieldSource::Bridge(_) => {}
        }
    }

    fn swap_rewards(&self, e: &Env) -> i128 {
        let reward_token = match self {
            YieldSource::Farm(source) => source.reward_token.clone(),
            YieldSource::Lending(source) => source.reward_token.clone(),
            YieldSource::Bridge(_) => panic_with_error!(e, StrategyError::UnsupportedOperation),
        };
        swap_held(e, self, &reward_token)
    }
}

impl YieldSource {
    fn swap_router(&self, e: &Env) -> Address {
        match self {
            YieldSource::Farm(source) => source.swap_router.clone(),
            YieldSource::Lending(source) => source.swap_router.clone(),
            YieldSource::Bridge(_) => panic_with_error!(e, StrategyError::UnsupportedOperation),
        }
    }
}

/// Swap the whole held balance of `token_in` into the strategy token
pub fn swap_held(e: &Env, source: &YieldSource, token_in: &Address) -> i128 {
    let strategy_token = common_storage::get_strategy_token(e);
    if *token_in == strategy_token {
        panic_with_error!(e, StrategyError::UnsupportedOperation);
    }
    let amount_in = soroban_sdk::token::TokenClient::new(e, token_in)
        .balance(&e.current_contract_address());
    let path = vec![e, token_in.clone(), strategy_token];
    swap::swap_exact(e, &source.swap_router(e), &path, amount_in)
}
