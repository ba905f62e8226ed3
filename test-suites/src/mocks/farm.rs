use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};

#[derive(Clone)]
#[contracttype]
pub enum FarmKey {
    StakeToken(u32),
    Staked(u32, Address),
    Pending(u32, Address),
}

const REWARD_TOKEN_KEY: &str = "RewardTok";

/// Staking farm paying rewards credited by the test through `accrue`
#[contract]
pub struct MockFarm;

#[contractimpl]
impl MockFarm {
    pub fn __constructor(e: Env, reward_token: Address) {
        e.storage().instance().set(&Symbol::new(&e, REWARD_TOKEN_KEY), &reward_token);
    }

    pub fn add_pool(e: Env, pool_id: u32, stake_token: Address) {
        e.storage().persistent().set(&FarmKey::StakeToken(pool_id), &stake_token);
    }

    /// Credit `amount` reward tokens to `user`. The farm must hold them.
    pub fn accrue(e: Env, pool_id: u32, user: Address, amount: i128) {
        let pending = Self::pending_reward(e.clone(), pool_id, user.clone());
        e.storage().persistent().set(&FarmKey::Pending(pool_id, user), &(pending + amount));
    }

    pub fn deposit(e: Env, from: Address, pool_id: u32, amount: i128) {
        from.require_auth();
        pay_rewards(&e, pool_id, &from);
        if amount > 0 {
            stake_token(&e, pool_id).transfer(&from, &e.current_contract_address(), &amount);
            let staked = Self::user_info(e.clone(), pool_id, from.clone());
            e.storage().persistent().set(&FarmKey::Staked(pool_id, from), &(staked + amount));
        }
    }

    pub fn withdraw(e: Env, from: Address, pool_id: u32, amount: i128) {
        from.require_auth();
        pay_rewards(&e, pool_id, &from);
        if amount > 0 {
            let staked = Self::user_info(e.clone(), pool_id, from.clone());
            assert!(staked >= amount, "withdraw exceeds stake");
            e.storage().persistent().set(&FarmKey::Staked(pool_id, from.clone()), &(staked - amount));
            stake_token(&e, pool_id).transfer(&e.current_contract_address(), &from, &amount);
        }
    }

    pub fn emergency_withdraw(e: Env, from: Address, pool_id: u32) {
        from.require_auth();
        let staked = Self::user_info(e.clone(), pool_id, from.clone());
        e.storage().persistent().set(&FarmKey::Staked(pool_id, from.clone()), &0i128);
        e.storage().persistent().set(&FarmKey::Pending(pool_id, from.clone()), &0i128);
        if staked > 0 {
            stake_token(&e, pool_id).transfer(&e.current_contract_address(), &from, &staked);
        }
    }

    pub fn user_info(e: Env, pool_id: u32, user: Address) -> i128 {
        e.storage().persistent().get(&FarmKey::Staked(pool_id, user)).unwrap_or(0)
    }

    pub fn pending_reward(e: Env, pool_id: u32, user: Address) -> i128 {
        e.storage().persistent().get(&FarmKey::Pending(pool_id, user)).unwrap_or(0)
    }
}

fn stake_token(e: &Env, pool_id: u32) -> TokenClient<'_> {
    let token: Address = e.storage().persistent().get(&FarmKey::StakeToken(pool_id)).unwrap();
    TokenClient::new(e, &token)
}

fn pay_rewards(e: &Env, pool_id: u32, user: &Address) {
    let key = FarmKey::Pending(pool_id, user.clone());
    let pending: i128 = e.storage().persistent().get(&key).unwrap_or(0);
    if pending > 0 {
        let reward_token: Address = e.storage().instance().get(&Symbol::new(e, REWARD_TOKEN_KEY)).unwrap();
        TokenClient::new(e, &reward_token).transfer(&e.current_contract_address(), user, &pending);
        e.storage().persistent().set(&key, &0i128);
    }
}
