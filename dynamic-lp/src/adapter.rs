use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};
use strategy_common::{
    base::YieldAdapter, dependencies::SubStrategyClient, storage as common_storage, StrategyError,
};

/// Delegates the yield source calls to the current sub-strategy
pub struct SubStrategyAdapter {
    pub sub_strategy: Address,
}

impl SubStrategyAdapter {
    fn client<'a>(&self, e: &'a Env) -> SubStrategyClient<'a> {
        SubStrategyClient::new(e, &self.sub_strategy)
    }

    /// The current sub-strategy must stake the router token itself
    fn require_handling(&self, e: &Env) {
        if self.client(e).strategy_token_in() != common_storage::get_strategy_token(e) {
            panic_with_error!(e, StrategyError::NotHandlingStrategyToken);
        }
    }
}

impl YieldAdapter for SubStrategyAdapter {
    fn skim(&self, e: &Env, amount: i128) {
        self.require_handling(e);
        TokenClient::new(e, &common_storage::get_strategy_token(e)).transfer(
            &e.current_contract_address(),
            &self.sub_strategy,
            &amount,
        );
        self.client(e).skim(&e.current_contract_address(), &amount);
    }

    fn harvest(&self, e: &Env, balance: i128) -> i128 {
        self.client(e).harvest(&e.current_contract_address(), &balance)
    }

    fn withdraw(&self, e: &Env, amount: i128) {
        self.require_handling(e);
        self.client(e).withdraw(&e.current_contract_address(), &amount);
    }

    fn exit(&self, e: &Env) {
        self.require_handling(e);
        self.client(e).exit(&e.current_contract_address());
    }

    fn position(&self, e: &Env) -> i128 {
        self.client(e).position()
    }

    fn swap_rewards(&self, e: &Env) -> i128 {
        self.client(e).swap_to_lp(&e.current_contract_address())
    }
}
