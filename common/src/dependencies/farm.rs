use soroban_sdk::{contractclient, Address, Env};

/// Staking farm paying a reward token on every deposit or withdraw
#[contractclient(name = "Client")]
pub trait FarmInterface {
    /// Stake `amount`, pulled from `from`, and pay out pending rewards
    fn deposit(e: Env, from: Address, pool_id: u32, amount: i128);

    /// Unstake `amount` and pay out pending rewards. `amount` of 0 only claims.
    fn withdraw(e: Env, from: Address, pool_id: u32, amount: i128);

    /// Unstake everything without paying rewards
    fn emergency_withdraw(e: Env, from: Address, pool_id: u32);

    fn user_info(e: Env, pool_id: u32, user: Address) -> i128;

    fn pending_reward(e: Env, pool_id: u32, user: Address) -> i128;
}
