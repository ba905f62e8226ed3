use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, vec, Address, Env};
use stellar_access::ownable;
use stellar_macros::only_owner;
use strategy_common::{
    constants::ORACLE_DECIMALS, dependencies::FarmClient, pricing, swap, SwitchAmounts,
};

use crate::{
    errors::SubStrategyError,
    events::SubStrategyEvents,
    storage::{self, SubStrategyConfig},
};

/// Yield source adapter driven by a dynamic LP router
///
/// Stakes `strategy_token_in` in a farm. When `strategy_token_in` differs from
/// the router token, tokens are wrapped on the way in and unwrapped on the way
/// out through the swap router.
#[contract]
pub struct DynamicSubLpStrategy;

#[contractimpl]
impl DynamicSubLpStrategy {
    pub fn __constructor(e: &Env, owner: Address, config: SubStrategyConfig) {
        ownable::set_owner(e, &owner);
        storage::set_config(e, &config);
        storage::extend_instance(e);
    }

    pub fn owner(e: &Env) -> Option<Address> {
        ownable::get_owner(e)
    }

    pub fn config(e: &Env) -> SubStrategyConfig {
        storage::get_config(e)
    }

    pub fn strategy_token_in(e: &Env) -> Address {
        storage::get_config(e).strategy_token_in
    }

    pub fn strategy_token_out(e: &Env) -> Address {
        storage::get_config(e).strategy_token_out
    }

    pub fn position(e: &Env) -> i128 {
        let config = storage::get_config(e);
        FarmClient::new(e, &config.farm).user_info(&config.pool_id, &e.current_contract_address())
    }

    /// (Router only) Stake `amount` of `strategy_token_in` sent by the router
    pub fn skim(e: &Env, caller: Address, amount: i128) {
        let config = require_router(e, &caller);
        if amount <= 0 {
            panic_with_error!(e, SubStrategyError::InvalidAmount);
        }
        stake(e, &config, amount);
    }

    /// (Router only) Claim farm rewards. Staked principal does not change.
    pub fn harvest(e: &Env, caller: Address, _balance: i128) -> i128 {
        let config = require_router(e, &caller);
        FarmClient::new(e, &config.farm).withdraw(&e.current_contract_address(), &config.pool_id, &0);
        0
    }

    /// (Router only) Unstake `amount` and send it to the router
    pub fn withdraw(e: &Env, caller: Address, amount: i128) -> i128 {
        let config = require_router(e, &caller);
        let this = e.current_contract_address();
        FarmClient::new(e, &config.farm).withdraw(&this, &config.pool_id, &amount);
        send_out(e, &config, &config.router)
    }

    /// (Router only) Unstake everything and send it to the router
    pub fn exit(e: &Env, caller: Address) -> i128 {
        let config = require_router(e, &caller);
        FarmClient::new(e, &config.farm).emergency_withdraw(&e.current_contract_address(), &config.pool_id);
        send_out(e, &config, &config.router)
    }

    /// (Router only) Swap held rewards into `strategy_token_out` and send them to the router
    pub fn swap_to_lp(e: &Env, caller: Address) -> i128 {
        let config = require_router(e, &caller);
        let rewards = TokenClient::new(e, &config.reward_token).balance(&e.current_contract_address());
        let path = vec![e, config.reward_token.clone(), config.strategy_token_out.clone()];
        let amount_out = swap::swap_exact(e, &config.swap_router, &path, rewards);
        if amount_out > 0 {
            TokenClient::new(e, &config.strategy_token_out).transfer(
                &e.current_contract_address(),
                &config.router,
                &amount_out,
            );
        }
        amount_out
    }

    /// (Router only) Wrap every held `strategy_token_out` and stake it
    ///
    /// ### Returns
    /// The amount staked and its oracle value
    pub fn wrap_and_deposit(e: &Env, caller: Address) -> SwitchAmounts {
        let config = require_router(e, &caller);
        let this = e.current_contract_address();

        let held = TokenClient::new(e, &config.strategy_token_out).balance(&this);
        if config.strategy_token_in != config.strategy_token_out && held > 0 {
            let path = vec![e, config.strategy_token_out.clone(), config.strategy_token_in.clone()];
            swap::swap_exact(e, &config.swap_router, &path, held);
        }
        let amount = TokenClient::new(e, &config.strategy_token_in).balance(&this);
        if amount > 0 {
            stake(e, &config, amount);
        }

        let value = pricing::value_of(e, &config.oracle, &config.strategy_token_in, amount, ORACLE_DECIMALS);
        SubStrategyEvents::wrap_and_deposit(e, amount, value);
        SwitchAmounts { amount, value }
    }

    /// (Router only) Unstake everything, unwrap it and send it to `to`
    ///
    /// ### Returns
    /// The amount of `strategy_token_out` sent and the oracle value of the
    /// position before unwrapping
    pub fn withdraw_and_unwrap_to(e: &Env, caller: Address, to: Address) -> SwitchAmounts {
        let config = require_router(e, &caller);
        let this = e.current_contract_address();
        let farm = FarmClient::new(e, &config.farm);

        let staked = farm.user_info(&config.pool_id, &this);
        let value = pricing::value_of(e, &config.oracle, &config.strategy_token_in, staked, ORACLE_DECIMALS);
        if staked > 0 {
            farm.withdraw(&this, &config.pool_id, &staked);
        }

        let amount = send_out(e, &config, &to);
        SubStrategyEvents::withdraw_and_unwrap(e, to, amount, value);
        SwitchAmounts { amount, value }
    }

    /// (Owner only) Recover any token held by the adapter
    #[only_owner]
    pub fn rescue_tokens(e: &Env, token: Address, to: Address, amount: i128) {
        TokenClient::new(e, &token).transfer(&e.current_contract_address(), &to, &amount);
        SubStrategyEvents::rescue_tokens(e, token, to, amount);
    }

    pub fn transfer_ownership(e: &Env, new_owner: Address, live_until_ledger: u32) {
        ownable::transfer_ownership(e, &new_owner, live_until_ledger);
    }

    pub fn accept_ownership(e: &Env) {
        ownable::accept_ownership(e);
    }
}

fn require_router(e: &Env, caller: &Address) -> SubStrategyConfig {
    storage::extend_instance(e);
    caller.require_auth();
    let config = storage::get_config(e);
    if *caller != config.router {
        panic_with_error!(e, SubStrategyError::Unauthorized);
    }
    config
}

fn stake(e: &Env, config: &SubStrategyConfig, amount: i128) {
    swap::authorize_transfer(e, &config.strategy_token_in, &config.farm, amount);
    FarmClient::new(e, &config.farm).deposit(&e.current_contract_address(), &config.pool_id, &amount);
}

/// Unwrap every held `strategy_token_in` and send all `strategy_token_out` to `to`
fn send_out(e: &Env, config: &SubStrategyConfig, to: &Address) -> i128 {
    let this = e.current_contract_address();
    if config.strategy_token_in != config.strategy_token_out {
        let held = TokenClient::new(e, &config.strategy_token_in).balance(&this);
        let path = vec![e, config.strategy_token_in.clone(), config.strategy_token_out.clone()];
        swap::swap_exact(e, &config.swap_router, &path, held);
    }

    let token_out = TokenClient::new(e, &config.strategy_token_out);
    let amount = token_out.balance(&this);
    if amount > 0 {
        token_out.transfer(&this, to, &amount);
    }
    amount
}
