use soroban_sdk::{vec, Address, Env, Symbol, Vec};

/********** Storage Types **********/

const SUB_STRATEGIES_KEY: &str = "SubStrats";
const CURRENT_INDEX_KEY: &str = "CurrentIdx";

/********** Sub-Strategies **********/

pub fn get_sub_strategies(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, SUB_STRATEGIES_KEY))
        .unwrap_or(vec![e])
}

pub fn set_sub_strategies(e: &Env, subs: &Vec<Address>) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, SUB_STRATEGIES_KEY), subs);
}

pub fn get_current_index(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CURRENT_INDEX_KEY))
        .unwrap_or(0)
}

pub fn set_current_index(e: &Env, index: u32) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, CURRENT_INDEX_KEY), &index);
}
