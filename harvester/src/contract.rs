use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};
use stellar_access::ownable;
use stellar_macros::only_owner;
use strategy_common::dependencies::StrategyClient;

use crate::{errors::HarvesterError, events::HarvesterEvents, storage};

/// Batches `safe_harvest` calls over several strategies
///
/// The harvester must be registered as an executor of every strategy it
/// drives. A failing strategy reverts the whole batch.
#[contract]
pub struct CombineHarvester;

#[contractimpl]
impl CombineHarvester {
    pub fn __constructor(e: &Env, owner: Address) {
        ownable::set_owner(e, &owner);
        storage::extend_instance(e);
    }

    pub fn owner(e: &Env) -> Option<Address> {
        ownable::get_owner(e)
    }

    /// (Owner only) Run `safe_harvest` on each strategy, then optionally `swap_to_lp`
    ///
    /// Every vector holds one entry per strategy.
    ///
    /// ### Panics
    /// - `LengthMismatch` if the vectors differ in length
    #[only_owner]
    #[allow(clippy::too_many_arguments)]
    pub fn execute_safe_harvests(
        e: &Env,
        strategies: Vec<Address>,
        rebalance: Vec<bool>,
        max_balances: Vec<i128>,
        max_change_amounts: Vec<i128>,
        harvest_rewards: Vec<bool>,
        swap_rewards: Vec<bool>,
        min_out_amounts: Vec<i128>,
    ) {
        storage::extend_instance(e);
        let count = strategies.len();
        if rebalance.len() != count
            || max_balances.len() != count
            || max_change_amounts.len() != count
            || harvest_rewards.len() != count
            || swap_rewards.len() != count
            || min_out_amounts.len() != count
        {
            panic_with_error!(e, HarvesterError::LengthMismatch);
        }

        let this = e.current_contract_address();
        for i in 0..count {
            let strategy = StrategyClient::new(e, &strategies.get_unchecked(i));
            strategy.safe_harvest(
                &this,
                &max_balances.get_unchecked(i),
                &rebalance.get_unchecked(i),
                &max_change_amounts.get_unchecked(i),
                &harvest_rewards.get_unchecked(i),
            );
            if swap_rewards.get_unchecked(i) {
                strategy.swap_to_lp(&this, &min_out_amounts.get_unchecked(i));
            }
        }

        HarvesterEvents::safe_harvests(e, count);
    }

    pub fn transfer_ownership(e: &Env, new_owner: Address, live_until_ledger: u32) {
        ownable::transfer_ownership(e, &new_owner, live_until_ledger);
    }

    pub fn accept_ownership(e: &Env) {
        ownable::accept_ownership(e);
    }
}
