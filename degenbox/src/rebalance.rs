//! Rebalance math of the ledger

use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;
use strategy_common::{constants::PERCENTAGE_DENOMINATOR, RebalanceOrder, StrategyData, Totals};

/// Balance the strategy should hold, floored so it never over-allocates
///
/// ### Arguments
/// * `elastic` - Total tokens owned by share holders
/// * `max_elastic` - Cap on the elastic used for the target, `i128::MAX` for none
/// * `target_percentage` - Percentage of the capped elastic to deploy
pub fn target_balance(e: &Env, elastic: i128, max_elastic: i128, target_percentage: u32) -> i128 {
    let capped = if max_elastic > 0 && elastic > max_elastic {
        max_elastic
    } else {
        elastic
    };
    if capped <= 0 || target_percentage == 0 {
        return 0;
    }
    capped.fixed_mul_floor(e, &(target_percentage as i128), &PERCENTAGE_DENOMINATOR)
}

/// Movement needed to bring `balance` to the target, limited by `max_change_amount` when nonzero
pub fn compute_order(
    e: &Env,
    totals: &Totals,
    data: &StrategyData,
    max_elastic: i128,
    max_change_amount: i128,
) -> RebalanceOrder {
    let target = target_balance(e, totals.elastic, max_elastic, data.target_percentage);
    let mut order = RebalanceOrder::default();
    if data.balance < target {
        order.invest = limit(target - data.balance, max_change_amount);
    } else if data.balance > target {
        order.divest = limit(data.balance - target, max_change_amount);
    }
    order
}

fn limit(amount: i128, max_change_amount: i128) -> i128 {
    if max_change_amount > 0 && amount > max_change_amount {
        max_change_amount
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(balance: i128, target_percentage: u32) -> StrategyData {
        StrategyData {
            strategy_start_date: 0,
            target_percentage,
            balance,
        }
    }

    #[test]
    fn test_target_balance_floors() {
        let e = Env::default();
        assert_eq!(target_balance(&e, 1_000_000, i128::MAX, 70), 700_000);
        assert_eq!(target_balance(&e, 999, i128::MAX, 70), 699);
        assert_eq!(target_balance(&e, 1_000_000, 500_000, 70), 350_000);
        assert_eq!(target_balance(&e, 1_000_000, i128::MAX, 0), 0);
    }

    #[test]
    fn test_compute_order_invest_and_divest() {
        let e = Env::default();
        let totals = Totals { elastic: 1_000_000, base: 1_000_000 };

        let order = compute_order(&e, &totals, &data(0, 70), i128::MAX, 0);
        assert_eq!(order, RebalanceOrder { invest: 700_000, divest: 0 });

        let order = compute_order(&e, &totals, &data(700_000, 50), i128::MAX, 0);
        assert_eq!(order, RebalanceOrder { invest: 0, divest: 200_000 });

        let order = compute_order(&e, &totals, &data(700_000, 50), i128::MAX, 50_000);
        assert_eq!(order, RebalanceOrder { invest: 0, divest: 50_000 });

        let order = compute_order(&e, &totals, &data(700_000, 70), i128::MAX, 0);
        assert_eq!(order, RebalanceOrder::default());
    }
}
