use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::StrategyError;

pub fn load_price(e: &Env, oracle: &Address, token: &Address) -> i128 {
    match PriceFeedClient::new(e, oracle).lastprice(&Asset::Stellar(token.clone())) {
        Some(price_data) if price_data.price > 0 => price_data.price,
        _ => panic_with_error!(e, StrategyError::PriceNotFound),
    }
}

/// Value of `amount` of `token` in oracle base units, floored
pub fn value_of(e: &Env, oracle: &Address, token: &Address, amount: i128, decimals: u32) -> i128 {
    if amount == 0 {
        return 0;
    }
    let price = load_price(e, oracle, token);
    amount.fixed_mul_floor(e, &price, &10i128.pow(decimals))
}

/// Convert `amount` of `from` into units of `to` using oracle prices, floored
pub fn convert(e: &Env, oracle: &Address, from: &Address, to: &Address, amount: i128) -> i128 {
    if amount == 0 {
        return 0;
    }
    let price_from = load_price(e, oracle, from);
    let price_to = load_price(e, oracle, to);
    amount.fixed_mul_floor(e, &price_from, &price_to)
}
