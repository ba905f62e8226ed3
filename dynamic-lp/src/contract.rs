use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};
use stellar_access::ownable;
use stellar_macros::only_owner;
use strategy_common::{
    access, base, dependencies::SubStrategyClient, fees, storage as common_storage, FeeParameters,
    StrategyError, StrategyStatus,
};

use crate::{events::RouterEvents, router, storage};

/// Strategy that routes its vault token through one of several sub-strategies
///
/// Every sub-strategy returns the router token. The executor can move the
/// whole position from the current sub-strategy to another one in a single
/// call, bounded by a minimum output, a slippage tolerance and a deadline.
#[contract]
pub struct DynamicLpStrategy;

#[contractimpl]
impl DynamicLpStrategy {
    pub fn __constructor(e: &Env, owner: Address, vault: Address, strategy_token: Address, executor: Address) {
        ownable::set_owner(e, &owner);
        base::initialize(e, &owner, &vault, &strategy_token);
        access::set_strategy_executor(e, &executor, true);
        common_storage::extend_instance(e);
    }

    /********** Views **********/

    pub fn owner(e: &Env) -> Option<Address> {
        ownable::get_owner(e)
    }

    pub fn vault(e: &Env) -> Address {
        common_storage::get_vault(e)
    }

    pub fn strategy_token(e: &Env) -> Address {
        common_storage::get_strategy_token(e)
    }

    pub fn status(e: &Env) -> StrategyStatus {
        common_storage::get_status(e)
    }

    pub fn sub_strategies(e: &Env) -> Vec<Address> {
        storage::get_sub_strategies(e)
    }

    pub fn current_index(e: &Env) -> u32 {
        storage::get_current_index(e)
    }

    pub fn current_sub_strategy(e: &Env) -> Address {
        router::current_sub_strategy(e)
    }

    /// Tokens staked by the current sub-strategy
    pub fn position(e: &Env) -> i128 {
        SubStrategyClient::new(e, &router::current_sub_strategy(e)).position()
    }

    pub fn max_balance(e: &Env) -> i128 {
        common_storage::get_max_balance(e)
    }

    pub fn fee_parameters(e: &Env) -> FeeParameters {
        common_storage::get_fee_parameters(e)
    }

    pub fn fee_collector(e: &Env) -> Address {
        common_storage::get_fee_parameters(e).fee_collector
    }

    pub fn is_executor(e: &Env, executor: Address) -> bool {
        common_storage::is_executor(e, &executor)
    }

    /********** Vault **********/

    pub fn skim(e: &Env, caller: Address, amount: i128) {
        common_storage::extend_instance(e);
        base::skim(e, &router::current_adapter(e), &caller, amount);
    }

    pub fn harvest(e: &Env, caller: Address, balance: i128, sender: Address) -> i128 {
        common_storage::extend_instance(e);
        base::harvest(e, &router::current_adapter(e), &caller, balance, &sender)
    }

    pub fn withdraw(e: &Env, caller: Address, amount: i128) -> i128 {
        common_storage::extend_instance(e);
        base::withdraw(e, &router::current_adapter(e), &caller, amount)
    }

    pub fn exit(e: &Env, caller: Address, balance: i128) -> i128 {
        common_storage::extend_instance(e);
        base::exit(e, &router::current_adapter(e), &caller, balance)
    }

    /********** Executor **********/

    pub fn safe_harvest(
        e: &Env,
        caller: Address,
        max_balance: i128,
        rebalance: bool,
        max_change_amount: i128,
        harvest_rewards: bool,
    ) {
        common_storage::extend_instance(e);
        base::safe_harvest(
            e,
            &router::current_adapter(e),
            &caller,
            max_balance,
            rebalance,
            max_change_amount,
            harvest_rewards,
        );
    }

    /// (Executor only) Convert the current sub-strategy rewards into the router token
    pub fn swap_to_lp(e: &Env, caller: Address, min_amount_out: i128) -> i128 {
        common_storage::extend_instance(e);
        base::swap_to_lp(e, &router::current_adapter(e), &caller, min_amount_out)
    }

    /// (Executor only) Move the whole position to the sub-strategy at `index`
    ///
    /// ### Arguments
    /// * `caller` - The owner or an executor
    /// * `index` - Index of the new sub-strategy
    /// * `max_slippage_bps` - Tolerated loss of oracle value, in basis points
    /// * `min_out` - Minimum amount the new sub-strategy must stake
    /// * `deadline` - Latest ledger timestamp the switch may run at, 0 for none
    ///
    /// ### Panics
    /// - `AlreadyCurrent` if `index` is the current sub-strategy
    /// - `InvalidIndex` if `index` is out of range
    /// - `DeadlineExpired` if the deadline has passed
    /// - `SwitchIncomplete` if the previous sub-strategy still holds a position
    /// - `InsufficientAmountOut` if fewer than `min_out` tokens were staked
    /// - `SlippageTooHigh` if `max_slippage_bps` is outside 0..=10_000 or the
    ///   value lost exceeds it
    pub fn change_strategy(
        e: &Env,
        caller: Address,
        index: u32,
        max_slippage_bps: i128,
        min_out: i128,
        deadline: u64,
    ) {
        common_storage::extend_instance(e);
        access::require_executor(e, &caller);
        access::require_active(e);

        if deadline != 0 && e.ledger().timestamp() > deadline {
            panic_with_error!(e, StrategyError::DeadlineExpired);
        }
        router::require_valid_slippage(e, max_slippage_bps);
        let current = storage::get_current_index(e);
        if index == current {
            panic_with_error!(e, StrategyError::AlreadyCurrent);
        }
        let subs = storage::get_sub_strategies(e);
        let (old_sub, new_sub) = match (subs.get(current), subs.get(index)) {
            (Some(old_sub), Some(new_sub)) => (old_sub, new_sub),
            _ => panic_with_error!(e, StrategyError::InvalidIndex),
        };

        let this = e.current_contract_address();
        let old_client = SubStrategyClient::new(e, &old_sub);
        let new_client = SubStrategyClient::new(e, &new_sub);

        let from = old_client.withdraw_and_unwrap_to(&this, &new_sub);
        let to = new_client.wrap_and_deposit(&this);

        if old_client.position() != 0 {
            panic_with_error!(e, StrategyError::SwitchIncomplete);
        }
        if to.amount < min_out {
            panic_with_error!(e, StrategyError::InsufficientAmountOut);
        }
        if to.value < router::min_value_after(e, from.value, max_slippage_bps) {
            panic_with_error!(e, StrategyError::SlippageTooHigh);
        }

        storage::set_current_index(e, index);
        RouterEvents::sub_strategy_changed(e, old_sub, new_sub, from.amount, to.amount);
    }

    /********** Owner **********/

    /// (Owner only) Register a sub-strategy returning the router token
    ///
    /// ### Panics
    /// - `InvalidSubStrategy` if the sub-strategy returns another token
    #[only_owner]
    pub fn add_sub_strategy(e: &Env, sub_strategy: Address) {
        common_storage::extend_instance(e);
        let token_out = SubStrategyClient::new(e, &sub_strategy).strategy_token_out();
        if token_out != common_storage::get_strategy_token(e) {
            panic_with_error!(e, StrategyError::InvalidSubStrategy);
        }

        let mut subs = storage::get_sub_strategies(e);
        subs.push_back(sub_strategy.clone());
        storage::set_sub_strategies(e, &subs);
        RouterEvents::sub_strategy_added(e, subs.len() - 1, sub_strategy);
    }

    #[only_owner]
    pub fn set_fee_parameters(e: &Env, fee_collector: Address, fee_percentage: u32) {
        common_storage::extend_instance(e);
        fees::set_fee_parameters(e, &fee_collector, fee_percentage);
    }

    #[only_owner]
    pub fn set_fee_collector(e: &Env, fee_collector: Address) {
        common_storage::extend_instance(e);
        fees::set_fee_collector(e, &fee_collector);
    }

    #[only_owner]
    pub fn set_strategy_executor(e: &Env, executor: Address, allowed: bool) {
        common_storage::extend_instance(e);
        access::set_strategy_executor(e, &executor, allowed);
    }

    /// (Owner only) Recover tokens once the router is retired
    #[only_owner]
    pub fn rescue_tokens(e: &Env, token: Address, to: Address, amount: i128) {
        common_storage::extend_instance(e);
        base::rescue_tokens(e, &token, &to, amount);
    }

    pub fn transfer_ownership(e: &Env, new_owner: Address, live_until_ledger: u32) {
        ownable::transfer_ownership(e, &new_owner, live_until_ledger);
    }

    pub fn accept_ownership(e: &Env) {
        ownable::accept_ownership(e);
    }
}
