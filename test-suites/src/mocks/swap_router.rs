use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Vec};

use crate::SCALAR_7;

#[derive(Clone)]
#[contracttype]
pub enum RouterKey {
    Rate(Address, Address),
}

/// Swap router paying out of its own reserves at fixed rates
#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    /// Units of `token_out` paid per unit of `token_in`, scaled by 1e7
    pub fn set_rate(e: Env, token_in: Address, token_out: Address, rate: i128) {
        e.storage().persistent().set(&RouterKey::Rate(token_in, token_out), &rate);
    }

    pub fn swap_exact_tokens_for_tokens(
        e: Env,
        from: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
    ) -> i128 {
        from.require_auth();
        let mut amount = amount_in;
        for i in 0..path.len() - 1 {
            let rate: i128 = e
                .storage()
                .persistent()
                .get(&RouterKey::Rate(path.get_unchecked(i), path.get_unchecked(i + 1)))
                .unwrap();
            amount = amount * rate / SCALAR_7;
        }
        assert!(amount >= amount_out_min, "insufficient output amount");

        let this = e.current_contract_address();
        TokenClient::new(&e, &path.get_unchecked(0)).transfer(&from, &this, &amount_in);
        TokenClient::new(&e, &path.get_unchecked(path.len() - 1)).transfer(&this, &to, &amount);
        amount
    }
}
