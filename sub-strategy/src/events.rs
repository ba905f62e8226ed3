use soroban_sdk::{Address, Env, Symbol};

pub struct SubStrategyEvents {}

impl SubStrategyEvents {
    /// Emitted when the router's tokens are wrapped and staked during a switch
    ///
    /// - topics - `["wrap_and_deposit"]`
    /// - data - `[amount: i128, value: i128]`
    pub fn wrap_and_deposit(e: &Env, amount: i128, value: i128) {
        let topics = (Symbol::new(e, "wrap_and_deposit"),);
        e.events().publish(topics, (amount, value));
    }

    /// Emitted when the position is unstaked and unwrapped during a switch
    ///
    /// - topics - `["withdraw_and_unwrap", to: Address]`
    /// - data - `[amount: i128, value: i128]`
    ///
    /// ### Arguments
    /// * to - The sub-strategy receiving the unwrapped tokens
    /// * amount - Tokens sent
    /// * value - Oracle value of the position before unwrapping
    pub fn withdraw_and_unwrap(e: &Env, to: Address, amount: i128, value: i128) {
        let topics = (Symbol::new(e, "withdraw_and_unwrap"), to);
        e.events().publish(topics, (amount, value));
    }

    /// - topics - `["rescue_tokens", token: Address]`
    /// - data - `[to: Address, amount: i128]`
    pub fn rescue_tokens(e: &Env, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "rescue_tokens"), token);
        e.events().publish(topics, (to, amount));
    }
}
