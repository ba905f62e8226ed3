use soroban_sdk::{contractclient, Address, Env, Vec};

#[contractclient(name = "Client")]
pub trait SwapRouterInterface {
    /// Swap `amount_in` of `path[0]`, pulled from `from`, along `path` and send the output to `to`
    fn swap_exact_tokens_for_tokens(
        e: Env,
        from: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
    ) -> i128;
}
