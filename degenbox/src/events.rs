use soroban_sdk::{Address, Env, Symbol};

pub struct DegenBoxEvents {}

impl DegenBoxEvents {
    /// Emitted when tokens are deposited into the ledger
    ///
    /// - topics - `["deposit", token: Address]`
    /// - data - `[from: Address, amount: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * token - The deposited token
    /// * from - The address receiving the shares
    /// * amount - The amount of tokens deposited
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, token: Address, from: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"), token);
        e.events().publish(topics, (from, amount, shares));
    }

    /// Emitted when shares are redeemed
    ///
    /// - topics - `["withdraw", token: Address]`
    /// - data - `[from: Address, to: Address, shares: i128, amount: i128]`
    pub fn withdraw(e: &Env, token: Address, from: Address, to: Address, shares: i128, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"), token);
        e.events().publish(topics, (from, to, shares, amount));
    }

    /// Emitted when a strategy reports profit
    ///
    /// - topics - `["strategy_profit", token: Address]`
    /// - data - `amount: i128`
    pub fn strategy_profit(e: &Env, token: Address, amount: i128) {
        let topics = (Symbol::new(e, "strategy_profit"), token);
        e.events().publish(topics, amount);
    }

    /// Emitted when a strategy reports a loss
    ///
    /// - topics - `["strategy_loss", token: Address]`
    /// - data - `amount: i128`
    pub fn strategy_loss(e: &Env, token: Address, amount: i128) {
        let topics = (Symbol::new(e, "strategy_loss"), token);
        e.events().publish(topics, amount);
    }

    /// Emitted when tokens are moved into the strategy
    ///
    /// - topics - `["strategy_invest", token: Address]`
    /// - data - `amount: i128`
    pub fn strategy_invest(e: &Env, token: Address, amount: i128) {
        let topics = (Symbol::new(e, "strategy_invest"), token);
        e.events().publish(topics, amount);
    }

    /// Emitted when tokens are moved out of the strategy
    ///
    /// - topics - `["strategy_divest", token: Address]`
    /// - data - `amount: i128`
    pub fn strategy_divest(e: &Env, token: Address, amount: i128) {
        let topics = (Symbol::new(e, "strategy_divest"), token);
        e.events().publish(topics, amount);
    }

    /// Emitted when a strategy change is queued
    ///
    /// - topics - `["strategy_queued", token: Address]`
    /// - data - `[strategy: Address, start_date: u64]`
    pub fn strategy_queued(e: &Env, token: Address, strategy: Address, start_date: u64) {
        let topics = (Symbol::new(e, "strategy_queued"), token);
        e.events().publish(topics, (strategy, start_date));
    }

    /// Emitted when a queued strategy becomes active
    ///
    /// - topics - `["strategy_set", token: Address]`
    /// - data - `strategy: Address`
    pub fn strategy_set(e: &Env, token: Address, strategy: Address) {
        let topics = (Symbol::new(e, "strategy_set"), token);
        e.events().publish(topics, strategy);
    }

    /// Emitted when the target percentage of a token changes
    ///
    /// - topics - `["target_percentage", token: Address]`
    /// - data - `target_percentage: u32`
    pub fn target_percentage(e: &Env, token: Address, target_percentage: u32) {
        let topics = (Symbol::new(e, "target_percentage"), token);
        e.events().publish(topics, target_percentage);
    }
}
