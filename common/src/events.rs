use soroban_sdk::{Address, Env, Symbol};

use crate::types::SettlementKind;

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when tokens sent by the vault are deployed into the yield source
    ///
    /// - topics - `["skim"]`
    /// - data - `amount: i128`
    pub fn skim(e: &Env, amount: i128) {
        let topics = (Symbol::new(e, "skim"),);
        e.events().publish(topics, amount);
    }

    /// Emitted when a harvest realizes a delta against the ledger balance
    ///
    /// - topics - `["harvest"]`
    /// - data - `[balance: i128, amount: i128]`
    ///
    /// ### Arguments
    /// * balance - The ledger balance the delta was measured against
    /// * amount - Profit sent to the vault (positive) or loss (negative)
    pub fn harvest(e: &Env, balance: i128, amount: i128) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(topics, (balance, amount));
    }

    /// Emitted when tokens are withdrawn from the yield source back to the vault
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[requested: i128, actual: i128]`
    pub fn withdraw(e: &Env, requested: i128, actual: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (requested, actual));
    }

    /// Emitted when the strategy is fully unwound and retired
    ///
    /// - topics - `["exit"]`
    /// - data - `[actual: i128, amount_added: i128]`
    pub fn exit(e: &Env, actual: i128, amount_added: i128) {
        let topics = (Symbol::new(e, "exit"),);
        e.events().publish(topics, (actual, amount_added));
    }

    /// Emitted when rewards are converted into the strategy token
    ///
    /// - topics - `["lp_minted"]`
    /// - data - `[total: i128, amount: i128, fee: i128]`
    ///
    /// ### Arguments
    /// * total - Strategy tokens produced by the conversion
    /// * amount - Part kept by the strategy
    /// * fee - Part sent to the fee collector
    pub fn lp_minted(e: &Env, total: i128, amount: i128, fee: i128) {
        let topics = (Symbol::new(e, "lp_minted"),);
        e.events().publish(topics, (total, amount, fee));
    }

    /// Emitted when an arbitrary held token is swapped
    ///
    /// - topics - `["swap_exact", token_in: Address]`
    /// - data - `[amount_in: i128, kept: i128, fee: i128]`
    pub fn swap_exact(e: &Env, token_in: Address, amount_in: i128, kept: i128, fee: i128) {
        let topics = (Symbol::new(e, "swap_exact"), token_in);
        e.events().publish(topics, (amount_in, kept, fee));
    }

    /// Emitted when fee parameters change
    ///
    /// - topics - `["set_fee_parameters"]`
    /// - data - `[fee_collector: Address, fee_percentage: u32]`
    pub fn set_fee_parameters(e: &Env, fee_collector: Address, fee_percentage: u32) {
        let topics = (Symbol::new(e, "set_fee_parameters"),);
        e.events().publish(topics, (fee_collector, fee_percentage));
    }

    /// Emitted when an executor is added or removed
    ///
    /// - topics - `["set_executor", executor: Address]`
    /// - data - `allowed: bool`
    pub fn set_executor(e: &Env, executor: Address, allowed: bool) {
        let topics = (Symbol::new(e, "set_executor"), executor);
        e.events().publish(topics, allowed);
    }

    /// Emitted when a bridge request is sent
    ///
    /// - topics - `["settlement_requested", id: u64]`
    /// - data - `[kind: SettlementKind, amount: i128]`
    pub fn settlement_requested(e: &Env, id: u64, kind: SettlementKind, amount: i128) {
        let topics = (Symbol::new(e, "settlement_requested"), id);
        e.events().publish(topics, (kind, amount));
    }

    /// Emitted when the bridge settles a request
    ///
    /// - topics - `["settled", id: u64]`
    /// - data - `amount: i128`
    pub fn settled(e: &Env, id: u64, amount: i128) {
        let topics = (Symbol::new(e, "settled"), id);
        e.events().publish(topics, amount);
    }

    /// Emitted when the owner recovers tokens from a retired strategy
    ///
    /// - topics - `["rescue_tokens", token: Address]`
    /// - data - `[to: Address, amount: i128]`
    pub fn rescue_tokens(e: &Env, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "rescue_tokens"), token);
        e.events().publish(topics, (to, amount));
    }
}
