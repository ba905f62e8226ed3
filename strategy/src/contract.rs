use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Vec};
use stellar_access::ownable;
use stellar_macros::only_owner;
use strategy_common::{
    access,
    base::{self, YieldAdapter},
    dependencies::DegenBoxClient,
    events::StrategyEvents,
    fees, storage as common_storage, FeeParameters, PendingSettlement, StrategyError, StrategyStatus,
};

use crate::{
    adapters::{self, bridge},
    storage,
    types::{BridgeSource, YieldSource},
};

/// Strategy deploying a vault token into a single yield source
#[contract]
pub struct StrategyContract;

#[contractimpl]
impl StrategyContract {
    /// Binds the strategy to its vault, token and yield source
    ///
    /// ### Arguments
    /// * `owner` - Owner and default fee collector
    /// * `vault` - The ledger allowed to skim, harvest, withdraw and exit
    /// * `strategy_token` - Token managed by the strategy
    /// * `executor` - Initial executor allowed to call `safe_harvest`
    /// * `source` - Yield source the token is deployed into
    pub fn __constructor(
        e: &Env,
        owner: Address,
        vault: Address,
        strategy_token: Address,
        executor: Address,
        source: YieldSource,
    ) {
        ownable::set_owner(e, &owner);
        base::initialize(e, &owner, &vault, &strategy_token);
        storage::set_source(e, &source);
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

    pub fn source(e: &Env) -> YieldSource {
        storage::get_source(e)
    }

    pub fn status(e: &Env) -> StrategyStatus {
        common_storage::get_status(e)
    }

    /// Strategy tokens currently deployed in the yield source
    pub fn position(e: &Env) -> i128 {
        storage::get_source(e).position(e)
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

    pub fn pending_settlements(e: &Env) -> Vec<PendingSettlement> {
        storage::get_pending_settlements(e)
    }

    /********** Vault **********/

    /// (Vault only) Deploy `amount` tokens the vault transferred in
    pub fn skim(e: &Env, caller: Address, amount: i128) {
        common_storage::extend_instance(e);
        base::skim(e, &storage::get_source(e), &caller, amount);
    }

    /// (Vault only) Report the delta of the position against `balance`
    ///
    /// Only does work when `sender` is this strategy, otherwise returns 0.
    pub fn harvest(e: &Env, caller: Address, balance: i128, sender: Address) -> i128 {
        common_storage::extend_instance(e);
        base::harvest(e, &storage::get_source(e), &caller, balance, &sender)
    }

    /// (Vault only) Withdraw `amount` to the vault, returns the amount sent
    pub fn withdraw(e: &Env, caller: Address, amount: i128) -> i128 {
        common_storage::extend_instance(e);
        base::withdraw(e, &storage::get_source(e), &caller, amount)
    }

    /// (Vault only) Unwind everything to the vault and retire
    ///
    /// ### Returns
    /// The amount sent minus `balance`
    pub fn exit(e: &Env, caller: Address, balance: i128) -> i128 {
        common_storage::extend_instance(e);
        base::exit(e, &storage::get_source(e), &caller, balance)
    }

    /********** Executor **********/

    /// (Executor only) Harvest, report to the vault and optionally rebalance
    ///
    /// ### Arguments
    /// * `caller` - The owner or an executor
    /// * `max_balance` - New cap on the vault elastic, 0 keeps the stored cap
    /// * `rebalance` - Move the position toward the vault target
    /// * `max_change_amount` - Upper bound of the move, 0 for none
    /// * `harvest_rewards` - Claim rewards from the yield source first
    ///
    /// ### Panics
    /// - `OnlyExecutor` if `caller` is neither the owner nor an executor
    /// - `BalanceDecreased` if the vault elastic dropped during the call
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
            &storage::get_source(e),
            &caller,
            max_balance,
            rebalance,
            max_change_amount,
            harvest_rewards,
        );
    }

    /// (Executor only) Withdraw `amount` from the yield source back to the vault
    ///
    /// A bridge source only requests the redemption; the tokens reach the
    /// vault when the bridge settles it.
    ///
    /// ### Returns
    /// The amount returned to the vault by this call
    pub fn safe_withdraw(e: &Env, caller: Address, amount: i128) -> i128 {
        common_storage::extend_instance(e);
        base::safe_withdraw(e, &storage::get_source(e), &caller, amount)
    }

    /// (Executor only) Convert held rewards into the strategy token
    ///
    /// ### Panics
    /// - `InsufficientAmountOut` if fewer than `min_amount_out` tokens were produced
    pub fn swap_to_lp(e: &Env, caller: Address, min_amount_out: i128) -> i128 {
        common_storage::extend_instance(e);
        base::swap_to_lp(e, &storage::get_source(e), &caller, min_amount_out)
    }

    /// (Executor only) Swap the held balance of `token` into the strategy token
    /// and take the fee
    ///
    /// ### Returns
    /// The strategy tokens kept after the fee
    ///
    /// ### Panics
    /// - `InsufficientAmountOut` if fewer than `min_amount_out` tokens were produced
    /// - `UnsupportedOperation` if `token` is the strategy token
    pub fn swap_exact_tokens(e: &Env, caller: Address, token: Address, min_amount_out: i128) -> i128 {
        common_storage::extend_instance(e);
        access::require_executor(e, &caller);
        access::require_active(e);

        let amount_in = TokenClient::new(e, &token).balance(&e.current_contract_address());
        let amount_out = adapters::swap_held(e, &storage::get_source(e), &token);
        if amount_out < min_amount_out {
            panic_with_error!(e, StrategyError::InsufficientAmountOut);
        }

        let (amount, fee) = fees::take_fee(e, &common_storage::get_strategy_token(e), amount_out);
        StrategyEvents::swap_exact(e, token, amount_in, amount, fee);
        amount
    }

    /// (Executor only) Redeem receipt tokens worth the earnings of a bridge source
    ///
    /// ### Returns
    /// The bridge request id
    ///
    /// ### Panics
    /// - `UnsupportedOperation` if the source is not a bridge
    /// - `RedeemingNotReady` if called within 20 minutes of the last redeem
    /// - `NothingToRedeem` if there are no earnings
    pub fn redeem_earnings(e: &Env, caller: Address) -> u64 {
        common_storage::extend_instance(e);
        access::require_executor(e, &caller);
        access::require_active(e);

        let source = require_bridge(e);
        let token = common_storage::get_strategy_token(e);
        let balance = DegenBoxClient::new(e, &common_storage::get_vault(e))
            .strategy_data(&token)
            .balance;
        bridge::redeem_earnings(e, &source, balance)
    }

    /// (Bridge only) Complete a pending deposit or redemption
    pub fn on_settle(e: &Env, caller: Address, id: u64, amount: i128) {
        common_storage::extend_instance(e);
        let source = require_bridge(e);
        bridge::on_settle(e, &source, &caller, id, amount);
    }

    /********** Owner **********/

    /// (Owner only) Set the fee collector and the fee percentage of converted rewards
    ///
    /// ### Panics
    /// - `InvalidFeePercentage` if `fee_percentage` > 50
    #[only_owner]
    pub fn set_fee_parameters(e: &Env, fee_collector: Address, fee_percentage: u32) {
        common_storage::extend_instance(e);
        fees::set_fee_parameters(e, &fee_collector, fee_percentage);
    }

    /// (Owner only) Set the fee collector, keeping the fee percentage
    #[only_owner]
    pub fn set_fee_collector(e: &Env, fee_collector: Address) {
        common_storage::extend_instance(e);
        fees::set_fee_collector(e, &fee_collector);
    }

    /// (Owner only) Add or remove an executor
    #[only_owner]
    pub fn set_strategy_executor(e: &Env, executor: Address, allowed: bool) {
        common_storage::extend_instance(e);
        access::set_strategy_executor(e, &executor, allowed);
    }

    /// (Owner only) Recover tokens once the strategy is retired
    ///
    /// ### Panics
    /// - `NotExited` if the strategy is still active
    #[only_owner]
    pub fn rescue_tokens(e: &Env, token: Address, to: Address, amount: i128) {
        common_storage::extend_instance(e);
        base::rescue_tokens(e, &token, &to, amount);
    }

    /// (Owner only) Start a two-step ownership transfer
    pub fn transfer_ownership(e: &Env, new_owner: Address, live_until_ledger: u32) {
        ownable::transfer_ownership(e, &new_owner, live_until_ledger);
    }

    /// (Pending owner only) Accept a pending ownership transfer
    pub fn accept_ownership(e: &Env) {
        ownable::accept_ownership(e);
    }
}

fn require_bridge(e: &Env) -> BridgeSource {
    match storage::get_source(e) {
        YieldSource::Bridge(source) => source,
        _ => panic_with_error!(e, StrategyError::UnsupportedOperation),
    }
}
