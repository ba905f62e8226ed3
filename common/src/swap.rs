use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol, Val, Vec};

use crate::dependencies::SwapRouterClient;

/// Authorize `to` to pull `amount` of `token` from this contract within the next call
pub fn authorize_transfer(e: &Env, token: &Address, to: &Address, amount: i128) {
    let args: Vec<Val> = vec![
        e,
        e.current_contract_address().into_val(e),
        to.into_val(e),
        amount.into_val(e),
    ];
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);
}

/// Swap `amount_in` of `path[0]` into `path[last]` through the router, output to this contract
///
/// Slippage is checked by the caller against the returned amount.
pub fn swap_exact(e: &Env, router: &Address, path: &Vec<Address>, amount_in: i128) -> i128 {
    if amount_in <= 0 {
        return 0;
    }
    let this = e.current_contract_address();
    authorize_transfer(e, &path.get_unchecked(0), router, amount_in);
    SwapRouterClient::new(e, router).swap_exact_tokens_for_tokens(
        &this,
        &amount_in,
        &0,
        path,
        &this,
    )
}
