use soroban_sdk::{contractclient, Address, Env};

use crate::types::SwitchAmounts;

/// Primitives a dynamic LP sub-strategy exposes to its router
#[contractclient(name = "Client")]
pub trait SubStrategyInterface {
    /// Token the sub-strategy deploys into its yield source
    fn strategy_token_in(e: Env) -> Address;

    /// Token the sub-strategy returns to the router
    fn strategy_token_out(e: Env) -> Address;

    /// Amount of `strategy_token_in` currently deployed
    fn position(e: Env) -> i128;

    fn skim(e: Env, caller: Address, amount: i128);

    fn harvest(e: Env, caller: Address, balance: i128) -> i128;

    fn withdraw(e: Env, caller: Address, amount: i128) -> i128;

    fn exit(e: Env, caller: Address) -> i128;

    fn swap_to_lp(e: Env, caller: Address) -> i128;

    fn wrap_and_deposit(e: Env, caller: Address) -> SwitchAmounts;

    fn withdraw_and_unwrap_to(e: Env, caller: Address, to: Address) -> SwitchAmounts;
}
