use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env};
use strategy_common::{constants::BPS_DENOMINATOR, StrategyError};

use crate::{adapter::SubStrategyAdapter, storage};

/// The sub-strategy currently holding the position
pub fn current_sub_strategy(e: &Env) -> Address {
    let subs = storage::get_sub_strategies(e);
    match subs.get(storage::get_current_index(e)) {
        Some(sub) => sub,
        None => panic_with_error!(e, StrategyError::InvalidSubStrategy),
    }
}

pub fn current_adapter(e: &Env) -> SubStrategyAdapter {
    SubStrategyAdapter {
        sub_strategy: current_sub_strategy(e),
    }
}

/// Tolerated value loss of a switch, at most the whole value
pub fn require_valid_slippage(e: &Env, max_slippage_bps: i128) {
    if !(0..=BPS_DENOMINATOR).contains(&max_slippage_bps) {
        panic_with_error!(e, StrategyError::SlippageTooHigh);
    }
}

/// Minimum value the new sub-strategy must hold after a switch
pub fn min_value_after(e: &Env, value_before: i128, max_slippage_bps: i128) -> i128 {
    value_before.fixed_mul_floor(e, &(BPS_DENOMINATOR - max_slippage_bps), &BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_value_after() {
        let e = Env::default();
        assert_eq!(min_value_after(&e, 1_000_000, 0), 1_000_000);
        assert_eq!(min_value_after(&e, 1_000_000, 50), 995_000);
        assert_eq!(min_value_after(&e, 999, 1), 998);
        assert_eq!(min_value_after(&e, 0, 100), 0);
        assert_eq!(min_value_after(&e, 1_000_000, 10_000), 0);
    }
}
