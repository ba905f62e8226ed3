use soroban_sdk::{contractclient, Address, Env};

/// Strategy entry points used by the ledger and the harvest orchestrator
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    fn strategy_token(e: Env) -> Address;

    fn skim(e: Env, caller: Address, amount: i128);

    fn harvest(e: Env, caller: Address, balance: i128, sender: Address) -> i128;

    fn withdraw(e: Env, caller: Address, amount: i128) -> i128;

    fn exit(e: Env, caller: Address, balance: i128) -> i128;

    fn safe_harvest(
        e: Env,
        caller: Address,
        max_balance: i128,
        rebalance: bool,
        max_change_amount: i128,
        harvest_rewards: bool,
    );

    fn swap_to_lp(e: Env, caller: Address, min_amount_out: i128) -> i128;
}
