use soroban_sdk::{contractclient, Address, Env};

/// Asynchronous settlement bridge. Requests are settled later by the bridge
/// calling `on_settle(bridge, id, amount)` on the requester.
#[contractclient(name = "Client")]
pub trait BridgeInterface {
    /// Convert `amount` of the stable token, pulled from `from`, into receipt tokens
    fn deposit_stable(e: Env, from: Address, amount: i128) -> u64;

    /// Convert `amount` of receipt tokens, pulled from `from`, back into the stable token
    fn redeem_stable(e: Env, from: Address, amount: i128) -> u64;
}
