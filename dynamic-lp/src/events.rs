use soroban_sdk::{Address, Env, Symbol};

pub struct RouterEvents {}

impl RouterEvents {
    /// Emitted when a sub-strategy is registered
    ///
    /// - topics - `["sub_strategy_added"]`
    /// - data - `[index: u32, sub_strategy: Address]`
    pub fn sub_strategy_added(e: &Env, index: u32, sub_strategy: Address) {
        let topics = (Symbol::new(e, "sub_strategy_added"),);
        e.events().publish(topics, (index, sub_strategy));
    }

    /// Emitted when the position moves to another sub-strategy
    ///
    /// - topics - `["sub_strategy_changed", from: Address, to: Address]`
    /// - data - `[amount_from: i128, amount_to: i128]`
    ///
    /// ### Arguments
    /// * from - The previous sub-strategy
    /// * to - The new current sub-strategy
    /// * amount_from - Router tokens released by the previous sub-strategy
    /// * amount_to - Tokens staked by the new sub-strategy
    pub fn sub_strategy_changed(e: &Env, from: Address, to: Address, amount_from: i128, amount_to: i128) {
        let topics = (Symbol::new(e, "sub_strategy_changed"), from, to);
        e.events().publish(topics, (amount_from, amount_to));
    }
}
