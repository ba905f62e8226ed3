#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contractclient, Address, Env};

use crate::types::{RebalanceOrder, StrategyData, Totals};

/// Ledger interface as consumed by strategies - manually defined so strategies
/// do not link the ledger contract itself
#[contractclient(name = "Client")]
pub trait DegenBoxInterface {
    /// Share accounting for `token`
    fn totals(e: Env, token: Address) -> Totals;

    /// Ledger view of the strategy bound to `token`
    fn strategy_data(e: Env, token: Address) -> StrategyData;

    /// Report a realized delta and receive the rebalance order. Profit must
    /// already be transferred to the ledger.
    fn report(
        e: Env,
        strategy: Address,
        token: Address,
        amount_added: i128,
        rebalance: bool,
        max_change_amount: i128,
        max_elastic: i128,
    ) -> RebalanceOrder;

    /// Account for tokens the strategy already returned for a divest order
    fn settle_divest(e: Env, strategy: Address, token: Address, amount: i128);
}
