//! Strategy state machine shared by every strategy contract
//!
//! A strategy contract keeps its binding (vault, strategy token), status, fee
//! parameters and executor set in the storage layout of [`crate::storage`] and
//! plugs its yield source in through [`YieldAdapter`]. The functions here run
//! the access checks and the vault protocol around the adapter calls.

use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::{
    access,
    dependencies::DegenBoxClient,
    errors::StrategyError,
    events::StrategyEvents,
    fees, storage,
    types::StrategyStatus,
};

/// A source of yield for the strategy token
///
/// Adapters move tokens between the strategy contract and the yield source.
/// Everything else (vault transfers, fees, status) is handled by this module.
pub trait YieldAdapter {
    /// Deploy `amount` of the strategy token held by this contract
    fn skim(&self, e: &Env, amount: i128);

    /// Measure the position against `balance`, the principal recorded by the
    /// vault. Realized profit is left in this contract as strategy tokens.
    ///
    /// ### Returns
    /// The signed delta, profit positive and loss negative
    fn harvest(&self, e: &Env, balance: i128) -> i128;

    /// Bring `amount` of the strategy token back into this contract
    fn withdraw(&self, e: &Env, amount: i128);

    /// Bring the whole position back into this contract
    fn exit(&self, e: &Env);

    /// Strategy tokens deployed in the yield source
    fn position(&self, e: &Env) -> i128;

    /// Claim pending reward tokens from the yield source
    fn harvest_rewards(&self, _e: &Env) {}

    /// Convert held reward tokens into strategy tokens held by this contract
    ///
    /// ### Returns
    /// The strategy tokens produced
    fn swap_rewards(&self, e: &Env) -> i128;
}

/// Store the binding and defaults of a new strategy
pub fn initialize(e: &Env, owner: &Address, vault: &Address, strategy_token: &Address) {
    storage::set_vault(e, vault);
    storage::set_strategy_token(e, strategy_token);
    storage::set_status(e, StrategyStatus::Active);
    fees::set_fee_parameters(e, owner, 0);
}

pub fn skim<A: YieldAdapter>(e: &Env, adapter: &A, caller: &Address, amount: i128) {
    access::require_vault(e, caller);
    access::require_active(e);
    if amount <= 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }

    adapter.skim(e, amount);
    StrategyEvents::skim(e, amount);
}

/// Vault initiated harvest. Only realizes a delta when the strategy itself
/// started the harvest, otherwise reports nothing.
pub fn harvest<A: YieldAdapter>(
    e: &Env,
    adapter: &A,
    caller: &Address,
    balance: i128,
    sender: &Address,
) -> i128 {
    access::require_vault(e, caller);
    if storage::get_status(e) == StrategyStatus::Retired
        || *sender != e.current_contract_address()
        || balance <= 0
    {
        return 0;
    }
    realize(e, adapter, balance)
}

pub fn withdraw<A: YieldAdapter>(e: &Env, adapter: &A, caller: &Address, amount: i128) -> i128 {
    access::require_vault(e, caller);
    access::require_active(e);

    adapter.withdraw(e, amount);
    let actual = return_all(e);
    StrategyEvents::withdraw(e, amount, actual);
    actual
}

pub fn exit<A: YieldAdapter>(e: &Env, adapter: &A, caller: &Address, balance: i128) -> i128 {
    access::require_vault(e, caller);
    access::require_active(e);

    adapter.exit(e);
    let actual = return_all(e);
    storage::set_status(e, StrategyStatus::Retired);

    let amount_added = actual - balance;
    StrategyEvents::exit(e, actual, amount_added);
    amount_added
}

/// Executor triggered harvest and rebalance
///
/// Once the delta is reported, the tokens held by the vault, this contract
/// and the yield source together must not decrease while the position is
/// rebalanced.
pub fn safe_harvest<A: YieldAdapter>(
    e: &Env,
    adapter: &A,
    caller: &Address,
    max_balance: i128,
    rebalance: bool,
    max_change_amount: i128,
    harvest_rewards: bool,
) {
    access::require_executor(e, caller);
    access::require_active(e);

    if harvest_rewards {
        adapter.harvest_rewards(e);
    }
    if max_balance > 0 {
        storage::set_max_balance(e, max_balance);
    }
    let max_balance = storage::get_max_balance(e);

    let this = e.current_contract_address();
    let token = storage::get_strategy_token(e);
    let vault = DegenBoxClient::new(e, &storage::get_vault(e));
    let pre_elastic = vault.totals(&token).elastic;
    let balance = vault.strategy_data(&token).balance;

    storage::set_status(e, StrategyStatus::Harvesting);

    let amount_added = if pre_elastic <= max_balance && balance > 0 {
        realize(e, adapter, balance)
    } else {
        0
    };

    let order = vault.report(
        &this,
        &token,
        &amount_added,
        &rebalance,
        &max_change_amount,
        &max_balance,
    );
    let holdings_before = holdings(e, adapter);
    if order.invest > 0 {
        adapter.skim(e, order.invest);
        StrategyEvents::skim(e, order.invest);
    } else if order.divest > 0 {
        adapter.withdraw(e, order.divest);
        let actual = return_all(e);
        vault.settle_divest(&this, &token, &actual);
        StrategyEvents::withdraw(e, order.divest, actual);
    }

    if holdings(e, adapter) < holdings_before {
        panic_with_error!(e, StrategyError::BalanceDecreased);
    }

    storage::set_status(e, StrategyStatus::Active);
}

/// Convert rewards into the strategy token and take the fee
///
/// ### Panics
/// If fewer than `min_amount_out` strategy tokens were produced
pub fn swap_to_lp<A: YieldAdapter>(
    e: &Env,
    adapter: &A,
    caller: &Address,
    min_amount_out: i128,
) -> i128 {
    access::require_executor(e, caller);
    access::require_active(e);

    let total = adapter.swap_rewards(e);
    if total < min_amount_out {
        panic_with_error!(e, StrategyError::InsufficientAmountOut);
    }

    let (amount, fee) = fees::take_fee(e, &storage::get_strategy_token(e), total);
    StrategyEvents::lp_minted(e, total, amount, fee);
    amount
}

/// Executor triggered withdrawal of `amount` back to the vault
///
/// Sources settling asynchronously return the tokens when the request settles.
///
/// ### Returns
/// The amount returned to the vault by this call
pub fn safe_withdraw<A: YieldAdapter>(e: &Env, adapter: &A, caller: &Address, amount: i128) -> i128 {
    access::require_executor(e, caller);
    access::require_active(e);
    if amount <= 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }

    adapter.withdraw(e, amount);
    let actual = return_all(e);
    if actual > 0 {
        DegenBoxClient::new(e, &storage::get_vault(e)).settle_divest(
            &e.current_contract_address(),
            &storage::get_strategy_token(e),
            &actual,
        );
    }
    StrategyEvents::withdraw(e, amount, actual);
    actual
}

/// Recover tokens left behind by a retired strategy
pub fn rescue_tokens(e: &Env, token: &Address, to: &Address, amount: i128) {
    access::require_exited(e);
    TokenClient::new(e, token).transfer(&e.current_contract_address(), to, &amount);
    StrategyEvents::rescue_tokens(e, token.clone(), to.clone(), amount);
}

/// Run the adapter harvest and forward realized profit to the vault
///
/// If the adapter reports a loss while loose strategy tokens are held, the
/// part of them exceeding the loss is sent as profit and the rest reinvested.
fn realize<A: YieldAdapter>(e: &Env, adapter: &A, balance: i128) -> i128 {
    let amount = adapter.harvest(e, balance);

    let this = e.current_contract_address();
    let vault = storage::get_vault(e);
    let token = TokenClient::new(e, &storage::get_strategy_token(e));
    let contract_balance = token.balance(&this);

    let amount_added = if amount >= 0 {
        if contract_balance > 0 {
            token.transfer(&this, &vault, &contract_balance);
        }
        contract_balance
    } else if contract_balance > 0 {
        let diff = amount + contract_balance;
        if diff > 0 {
            token.transfer(&this, &vault, &diff);
            adapter.skim(e, -amount);
        } else {
            adapter.skim(e, contract_balance);
        }
        diff
    } else {
        amount
    };

    StrategyEvents::harvest(e, balance, amount_added);
    amount_added
}

/// Strategy tokens held by the vault, this contract and the yield source
fn holdings<A: YieldAdapter>(e: &Env, adapter: &A) -> i128 {
    let token = TokenClient::new(e, &storage::get_strategy_token(e));
    token.balance(&storage::get_vault(e))
        + token.balance(&e.current_contract_address())
        + adapter.position(e)
}

/// Send every strategy token held by this contract to the vault
fn return_all(e: &Env) -> i128 {
    let this = e.current_contract_address();
    let token = TokenClient::new(e, &storage::get_strategy_token(e));
    let actual = token.balance(&this);
    if actual > 0 {
        token.transfer(&this, &storage::get_vault(e), &actual);
    }
    actual
}
