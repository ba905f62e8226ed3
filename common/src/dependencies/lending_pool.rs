use soroban_sdk::{contractclient, Address, Env};

/// Interest bearing lending pool
#[contractclient(name = "Client")]
pub trait LendingPoolInterface {
    /// Supply `amount`, pulled from `from`
    fn supply(e: Env, from: Address, amount: i128);

    /// Withdraw up to `amount` to `from`, returns the amount sent
    fn withdraw(e: Env, from: Address, amount: i128) -> i128;

    /// Supplied balance including accrued interest
    fn balance(e: Env, user: Address) -> i128;

    /// Send accrued incentive rewards to `from`, returns the amount sent
    fn claim_rewards(e: Env, from: Address) -> i128;
}
