use degenbox::rebalance::{compute_order, target_balance};
use proptest::prelude::*;
use soroban_sdk::Env;
use strategy_common::{StrategyData, Totals};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn order_never_overshoots_the_target(
        elastic in 1i128..1_000_000_000_0000000,
        balance_bps in 0i128..=10_000,
        target_percentage in 0u32..=95,
        max_change_amount in 0i128..1_000_000_0000000,
    ) {
        let e = Env::default();
        let balance = elastic * balance_bps / 10_000;
        let totals = Totals { elastic, base: elastic };
        let data = StrategyData { strategy_start_date: 0, target_percentage, balance };

        let order = compute_order(&e, &totals, &data, i128::MAX, max_change_amount);
        let target = target_balance(&e, elastic, i128::MAX, target_percentage);

        prop_assert!(order.invest == 0 || order.divest == 0);
        prop_assert!(order.invest >= 0 && order.divest >= 0);
        prop_assert!(balance + order.invest <= target || order.invest == 0);
        prop_assert!(balance - order.divest >= target || order.divest == 0);
        if max_change_amount > 0 {
            prop_assert!(order.invest <= max_change_amount);
            prop_assert!(order.divest <= max_change_amount);
        }
    }

    #[test]
    fn target_is_floored(
        elastic in 0i128..1_000_000_000_0000000,
        target_percentage in 0u32..=95,
    ) {
        let e = Env::default();
        let target = target_balance(&e, elastic, i128::MAX, target_percentage);

        prop_assert!(target * 100 <= elastic * target_percentage as i128);
        prop_assert!((target + 1) * 100 > elastic * target_percentage as i128 || target_percentage == 0);
    }
}
