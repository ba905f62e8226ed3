use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::{
    constants::{MAX_FEE_PERCENTAGE, PERCENTAGE_DENOMINATOR},
    errors::StrategyError,
    events::StrategyEvents,
    storage,
    types::FeeParameters,
};

pub fn set_fee_parameters(e: &Env, fee_collector: &Address, fee_percentage: u32) {
    if fee_percentage > MAX_FEE_PERCENTAGE {
        panic_with_error!(e, StrategyError::InvalidFeePercentage);
    }
    storage::set_fee_parameters(
        e,
        &FeeParameters {
            fee_collector: fee_collector.clone(),
            fee_percentage,
        },
    );
    StrategyEvents::set_fee_parameters(e, fee_collector.clone(), fee_percentage);
}

pub fn set_fee_collector(e: &Env, fee_collector: &Address) {
    let params = storage::get_fee_parameters(e);
    set_fee_parameters(e, fee_collector, params.fee_percentage);
}

/// Floor of `amount * fee_percentage / 100`
pub fn fee_for(e: &Env, amount: i128, fee_percentage: u32) -> i128 {
    if amount <= 0 || fee_percentage == 0 {
        return 0;
    }
    amount.fixed_mul_floor(e, &(fee_percentage as i128), &PERCENTAGE_DENOMINATOR)
}

/// Send the fee share of `amount` of `token` held by this contract to the fee collector
///
/// ### Returns
/// `(kept, fee)`
pub fn take_fee(e: &Env, token: &Address, amount: i128) -> (i128, i128) {
    let params = storage::get_fee_parameters(e);
    let fee = fee_for(e, amount, params.fee_percentage);
    if fee > 0 {
        TokenClient::new(e, token).transfer(
            &e.current_contract_address(),
            &params.fee_collector,
            &fee,
        );
    }
    (amount - fee, fee)
}
