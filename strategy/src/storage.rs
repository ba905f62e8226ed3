use soroban_sdk::{unwrap::UnwrapOptimized, vec, Env, Symbol, Vec};
use strategy_common::PendingSettlement;

use crate::types::YieldSource;

/********** Storage Types **********/

const SOURCE_KEY: &str = "Source";
const PENDING_KEY: &str = "Pending";
const LAST_REDEEM_KEY: &str = "LastRedeem";

/********** Yield Source **********/

pub fn get_source(e: &Env) -> YieldSource {
    e.storage()
        .instance()
        .get(&Symbol::new(e, SOURCE_KEY))
        .unwrap_optimized()
}

pub fn set_source(e: &Env, source: &YieldSource) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, SOURCE_KEY), source);
}

/********** Bridge Settlements **********/

/// Fetch the requests awaiting settlement or an empty Vec
pub fn get_pending_settlements(e: &Env) -> Vec<PendingSettlement> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PENDING_KEY))
        .unwrap_or(vec![e])
}

pub fn set_pending_settlements(e: &Env, pending: &Vec<PendingSettlement>) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, PENDING_KEY), pending);
}

pub fn get_last_redeem(e: &Env) -> Option<u64> {
    e.storage().instance().get(&Symbol::new(e, LAST_REDEEM_KEY))
}

pub fn set_last_redeem(e: &Env, timestamp: u64) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, LAST_REDEEM_KEY), &timestamp);
}
