use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};

#[derive(Clone)]
#[contracttype]
pub enum LendingKey {
    Balance(Address),
    Rewards(Address),
}

const TOKEN_KEY: &str = "Token";
const REWARD_TOKEN_KEY: &str = "RewardTok";
const WITHDRAW_FEE_KEY: &str = "WdrFee";

/// Lending pool whose interest and incentives are credited by the test
#[contract]
pub struct MockLendingPool;

#[contractimpl]
impl MockLendingPool {
    pub fn __constructor(e: Env, token: Address, reward_token: Address) {
        e.storage().instance().set(&Symbol::new(&e, TOKEN_KEY), &token);
        e.storage().instance().set(&Symbol::new(&e, REWARD_TOKEN_KEY), &reward_token);
    }

    /// Add `amount` of interest to the balance of `user`. The pool must hold the tokens.
    pub fn accrue_interest(e: Env, user: Address, amount: i128) {
        let balance = Self::balance(e.clone(), user.clone());
        e.storage().persistent().set(&LendingKey::Balance(user), &(balance + amount));
    }

    /// Simulate a write-down of the balance of `user`
    pub fn slash(e: Env, user: Address, amount: i128) {
        let balance = Self::balance(e.clone(), user.clone());
        e.storage().persistent().set(&LendingKey::Balance(user), &(balance - amount));
    }

    /// Keep `fee_bps` of every withdrawal while debiting the full amount
    pub fn set_withdraw_fee(e: Env, fee_bps: i128) {
        e.storage().instance().set(&Symbol::new(&e, WITHDRAW_FEE_KEY), &fee_bps);
    }

    pub fn set_rewards(e: Env, user: Address, amount: i128) {
        e.storage().persistent().set(&LendingKey::Rewards(user), &amount);
    }

    pub fn supply(e: Env, from: Address, amount: i128) {
        from.require_auth();
        token(&e, TOKEN_KEY).transfer(&from, &e.current_contract_address(), &amount);
        let balance = Self::balance(e.clone(), from.clone());
        e.storage().persistent().set(&LendingKey::Balance(from), &(balance + amount));
    }

    pub fn withdraw(e: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        let balance = Self::balance(e.clone(), from.clone());
        let sent = if amount > balance { balance } else { amount };
        if sent <= 0 {
            return 0;
        }
        e.storage().persistent().set(&LendingKey::Balance(from.clone()), &(balance - sent));

        let fee_bps: i128 = e
            .storage()
            .instance()
            .get(&Symbol::new(&e, WITHDRAW_FEE_KEY))
            .unwrap_or(0);
        let delivered = sent - sent * fee_bps / 10_000;
        token(&e, TOKEN_KEY).transfer(&e.current_contract_address(), &from, &delivered);
        delivered
    }

    pub fn balance(e: Env, user: Address) -> i128 {
        e.storage().persistent().get(&LendingKey::Balance(user)).unwrap_or(0)
    }

    pub fn claim_rewards(e: Env, from: Address) -> i128 {
        from.require_auth();
        let key = LendingKey::Rewards(from.clone());
        let rewards: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if rewards > 0 {
            token(&e, REWARD_TOKEN_KEY).transfer(&e.current_contract_address(), &from, &rewards);
            e.storage().persistent().set(&key, &0i128);
        }
        rewards
    }
}

fn token<'a>(e: &'a Env, key: &str) -> TokenClient<'a> {
    let address: Address = e.storage().instance().get(&Symbol::new(e, key)).unwrap();
    TokenClient::new(e, &address)
}
