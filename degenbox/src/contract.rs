use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, token, Address, Env};
use stellar_access::ownable;
use strategy_common::{
    constants::{MAX_TARGET_PERCENTAGE, STRATEGY_DELAY},
    dependencies::StrategyClient,
    RebalanceOrder, StrategyData, Totals,
};

use crate::{errors::DegenBoxError, events::DegenBoxEvents, rebalance, storage};

#[contract]
pub struct DegenBoxContract;

#[contractclient(name = "DegenBoxClient")]
pub trait DegenBox {
    /// Returns the current owner of the ledger, if any
    fn owner(e: Env) -> Option<Address>;

    /// (Owner only) Start a two-step ownership transfer
    ///
    /// # Arguments
    /// * `new_owner` - Address that must call `accept_ownership`
    /// * `live_until_ledger` - Last ledger the offer can be accepted in
    fn transfer_ownership(e: Env, new_owner: Address, live_until_ledger: u32);

    /// (Pending owner only) Accept a pending ownership transfer
    fn accept_ownership(e: Env);

    /// Returns the share accounting of `token`
    ///
    /// `elastic` counts every token owned by share holders, including the
    /// balance deployed in the strategy. `base` is the number of shares.
    fn totals(e: Env, token: Address) -> Totals;

    /// Returns the ledger view of the strategy bound to `token`
    fn strategy_data(e: Env, token: Address) -> StrategyData;

    /// Returns the active strategy of `token`
    fn strategy(e: Env, token: Address) -> Option<Address>;

    /// Returns the strategy queued for `token`
    fn pending_strategy(e: Env, token: Address) -> Option<Address>;

    /// Returns the shares of `token` held by `owner`
    fn balance_of(e: Env, token: Address, owner: Address) -> i128;

    /// Deposits tokens and mints shares to `from`
    ///
    /// The first deposit mints shares 1:1, later deposits mint
    /// `amount * base / elastic` (floor).
    ///
    /// # Arguments
    /// * `from` - Address paying the tokens and receiving the shares
    /// * `token` - Token to deposit
    /// * `amount` - Amount of tokens (must be > 0)
    ///
    /// # Returns
    /// Amount of shares minted
    ///
    /// # Panics
    /// - `ZeroAmount` if amount <= 0 or it is worth no shares
    fn deposit(e: Env, from: Address, token: Address, amount: i128) -> i128;

    /// Burns shares of `from` and sends the tokens they are worth to `to`
    ///
    /// Only tokens held by the ledger itself can be withdrawn; funds deployed in
    /// the strategy come back through a divest.
    ///
    /// # Returns
    /// Amount of tokens sent
    ///
    /// # Panics
    /// - `ZeroAmount` if shares <= 0
    /// - `InsufficientShares` if `from` holds fewer shares
    /// - `InsufficientLiquidity` if the ledger does not hold enough tokens
    fn withdraw(e: Env, from: Address, token: Address, shares: i128, to: Address) -> i128;

    /// (Owner only) Queue or confirm the strategy of `token`
    ///
    /// The first call queues `strategy` and sets the start date to
    /// `now + STRATEGY_DELAY`. Calling again with the same strategy once the
    /// start date has passed exits the current strategy, books its final
    /// delta and activates the queued one. Calling with a different strategy
    /// re-queues.
    ///
    /// # Panics
    /// - `TooEarly` if the start date has not been reached
    /// - `InvalidStrategy` if the strategy manages a different token
    fn set_strategy(e: Env, token: Address, strategy: Address);

    /// (Owner only) Set the percentage of `token` to deploy in its strategy
    ///
    /// # Panics
    /// - `InvalidTargetPercentage` if `target_percentage` > 95
    fn set_strategy_target_percentage(e: Env, token: Address, target_percentage: u32);

    /// Harvest the strategy of `token` and optionally rebalance it
    ///
    /// The strategy only realizes a delta when `caller` is the strategy itself,
    /// for anybody else this is a rebalance.
    ///
    /// # Arguments
    /// * `caller` - Address triggering the harvest
    /// * `token` - Token whose strategy to harvest
    /// * `rebalance` - Move the strategy balance toward its target
    /// * `max_change_amount` - Upper bound of the move, 0 for none
    ///
    /// # Panics
    /// - `NoStrategy` if no strategy is set for `token`
    fn harvest(e: Env, caller: Address, token: Address, rebalance: bool, max_change_amount: i128);

    /// (Strategy only) Book a delta realized by the strategy and rebalance
    ///
    /// Profit must already be transferred to the ledger. An invest order is
    /// transferred to the strategy before returning. A divest order must be
    /// completed by the strategy with `settle_divest`.
    ///
    /// # Arguments
    /// * `strategy` - The reporting strategy
    /// * `token` - Token of the strategy
    /// * `amount_added` - Profit (positive) or loss (negative)
    /// * `rebalance` - Whether to compute a rebalance order
    /// * `max_change_amount` - Upper bound of the order, 0 for none
    /// * `max_elastic` - Cap on the elastic used for the target
    ///
    /// # Returns
    /// The rebalance order
    ///
    /// # Panics
    /// - `UnauthorizedStrategy` if `strategy` is not the active strategy of `token`
    fn report(
        e: Env,
        strategy: Address,
        token: Address,
        amount_added: i128,
        rebalance: bool,
        max_change_amount: i128,
        max_elastic: i128,
    ) -> RebalanceOrder;

    /// (Strategy only) Book tokens returned by the strategy for a divest order
    ///
    /// # Panics
    /// - `UnauthorizedStrategy` if `strategy` is not the active strategy of `token`
    fn settle_divest(e: Env, strategy: Address, token: Address, amount: i128);
}

#[contractimpl]
impl DegenBoxContract {
    /// Initializes the ledger with its owner
    pub fn __constructor(e: Env, owner: Address) {
        ownable::set_owner(&e, &owner);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl DegenBox for DegenBoxContract {
    fn owner(e: Env) -> Option<Address> {
        storage::extend_instance(&e);
        ownable::get_owner(&e)
    }

    fn transfer_ownership(e: Env, new_owner: Address, live_until_ledger: u32) {
        storage::extend_instance(&e);
        ownable::transfer_ownership(&e, &new_owner, live_until_ledger);
    }

    fn accept_ownership(e: Env) {
        storage::extend_instance(&e);
        ownable::accept_ownership(&e);
    }

    fn totals(e: Env, token: Address) -> Totals {
        storage::extend_instance(&e);
        storage::get_totals(&e, &token)
    }

    fn strategy_data(e: Env, token: Address) -> StrategyData {
        storage::extend_instance(&e);
        storage::get_strategy_data(&e, &token)
    }

    fn strategy(e: Env, token: Address) -> Option<Address> {
        storage::extend_instance(&e);
        storage::get_strategy(&e, &token)
    }

    fn pending_strategy(e: Env, token: Address) -> Option<Address> {
        storage::extend_instance(&e);
        storage::get_pending_strategy(&e, &token)
    }

    fn balance_of(e: Env, token: Address, owner: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &token, &owner)
    }

    fn deposit(e: Env, from: Address, token: Address, amount: i128) -> i128 {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(e, DegenBoxError::ZeroAmount);
        }

        let mut totals = storage::get_totals(&e, &token);
        let shares = if totals.base == 0 || totals.elastic == 0 {
            // First deposit gets 1:1 ratio
            amount
        } else {
            amount.fixed_mul_floor(&e, &totals.base, &totals.elastic)
        };
        if shares <= 0 {
            panic_with_error!(e, DegenBoxError::ZeroAmount);
        }

        token::Client::new(&e, &token).transfer(&from, &e.current_contract_address(), &amount);

        totals.elastic += amount;
        totals.base += shares;
        storage::set_totals(&e, &token, &totals);
        let balance = storage::get_shares(&e, &token, &from);
        storage::set_shares(&e, &token, &from, balance + shares);

        DegenBoxEvents::deposit(&e, token, from, amount, shares);

        storage::extend_instance(&e);
        shares
    }

    fn withdraw(e: Env, from: Address, token: Address, shares: i128, to: Address) -> i128 {
        from.require_auth();
        if shares <= 0 {
            panic_with_error!(e, DegenBoxError::ZeroAmount);
        }
        let balance = storage::get_shares(&e, &token, &from);
        if balance < shares {
            panic_with_error!(e, DegenBoxError::InsufficientShares);
        }

        let mut totals = storage::get_totals(&e, &token);
        let amount = shares.fixed_mul_floor(&e, &totals.elastic, &totals.base);

        // Funds deployed in the strategy are not withdrawable
        let token_client = token::Client::new(&e, &token);
        if token_client.balance(&e.current_contract_address()) < amount {
            panic_with_error!(e, DegenBoxError::InsufficientLiquidity);
        }

        totals.elastic -= amount;
        totals.base -= shares;
        storage::set_totals(&e, &token, &totals);
        storage::set_shares(&e, &token, &from, balance - shares);
        token_client.transfer(&e.current_contract_address(), &to, &amount);

        DegenBoxEvents::withdraw(&e, token, from, to, shares, amount);

        storage::extend_instance(&e);
        amount
    }

    fn set_strategy(e: Env, token: Address, strategy: Address) {
        ownable::enforce_owner_auth(&e);

        let mut data = storage::get_strategy_data(&e, &token);
        let pending = storage::get_pending_strategy(&e, &token);
        let now = e.ledger().timestamp();

        if data.strategy_start_date == 0 || pending.as_ref() != Some(&strategy) {
            if StrategyClient::new(&e, &strategy).strategy_token() != token {
                panic_with_error!(e, DegenBoxError::InvalidStrategy);
            }
            storage::set_pending_strategy(&e, &token, &strategy);
            data.strategy_start_date = now + STRATEGY_DELAY;
            DegenBoxEvents::strategy_queued(&e, token.clone(), strategy, data.strategy_start_date);
        } else {
            if now < data.strategy_start_date {
                panic_with_error!(e, DegenBoxError::TooEarly);
            }

            if let Some(current) = storage::get_strategy(&e, &token) {
                let balance_change =
                    StrategyClient::new(&e, &current).exit(&e.current_contract_address(), &data.balance);
                let mut totals = storage::get_totals(&e, &token);
                apply_delta(&e, &token, &mut totals, &mut data, balance_change, false);
                storage::set_totals(&e, &token, &totals);
                DegenBoxEvents::strategy_divest(&e, token.clone(), data.balance);
            }

            storage::set_strategy(&e, &token, &strategy);
            storage::remove_pending_strategy(&e, &token);
            data.strategy_start_date = 0;
            data.balance = 0;
            DegenBoxEvents::strategy_set(&e, token.clone(), strategy);
        }

        storage::set_strategy_data(&e, &token, &data);
        storage::extend_instance(&e);
    }

    fn set_strategy_target_percentage(e: Env, token: Address, target_percentage: u32) {
        ownable::enforce_owner_auth(&e);
        if target_percentage > MAX_TARGET_PERCENTAGE {
            panic_with_error!(e, DegenBoxError::InvalidTargetPercentage);
        }

        let mut data = storage::get_strategy_data(&e, &token);
        data.target_percentage = target_percentage;
        storage::set_strategy_data(&e, &token, &data);

        DegenBoxEvents::target_percentage(&e, token, target_percentage);
        storage::extend_instance(&e);
    }

    fn harvest(e: Env, caller: Address, token: Address, rebalance: bool, max_change_amount: i128) {
        caller.require_auth();
        let strategy = match storage::get_strategy(&e, &token) {
            Some(strategy) => strategy,
            None => panic_with_error!(e, DegenBoxError::NoStrategy),
        };
        let this = e.current_contract_address();
        let strategy_client = StrategyClient::new(&e, &strategy);

        let mut totals = storage::get_totals(&e, &token);
        let mut data = storage::get_strategy_data(&e, &token);

        let amount_added = strategy_client.harvest(&this, &data.balance, &caller);
        apply_delta(&e, &token, &mut totals, &mut data, amount_added, true);

        if rebalance {
            let order = rebalance::compute_order(&e, &totals, &data, i128::MAX, max_change_amount);
            if order.invest > 0 {
                token::Client::new(&e, &token).transfer(&this, &strategy, &order.invest);
                strategy_client.skim(&this, &order.invest);
                data.balance += order.invest;
                DegenBoxEvents::strategy_invest(&e, token.clone(), order.invest);
            } else if order.divest > 0 {
                let actual = strategy_client.withdraw(&this, &order.divest);
                settle(&e, &token, &mut totals, &mut data, actual);
            }
        }

        storage::set_totals(&e, &token, &totals);
        storage::set_strategy_data(&e, &token, &data);
        storage::extend_instance(&e);
    }

    fn report(
        e: Env,
        strategy: Address,
        token: Address,
        amount_added: i128,
        rebalance: bool,
        max_change_amount: i128,
        max_elastic: i128,
    ) -> RebalanceOrder {
        require_active_strategy(&e, &strategy, &token);

        let mut totals = storage::get_totals(&e, &token);
        let mut data = storage::get_strategy_data(&e, &token);
        apply_delta(&e, &token, &mut totals, &mut data, amount_added, true);

        let order = if rebalance {
            rebalance::compute_order(&e, &totals, &data, max_elastic, max_change_amount)
        } else {
            RebalanceOrder::default()
        };
        if order.invest > 0 {
            token::Client::new(&e, &token).transfer(&e.current_contract_address(), &strategy, &order.invest);
            data.balance += order.invest;
            DegenBoxEvents::strategy_invest(&e, token.clone(), order.invest);
        }

        storage::set_totals(&e, &token, &totals);
        storage::set_strategy_data(&e, &token, &data);
        storage::extend_instance(&e);
        order
    }

    fn settle_divest(e: Env, strategy: Address, token: Address, amount: i128) {
        require_active_strategy(&e, &strategy, &token);

        let mut totals = storage::get_totals(&e, &token);
        let mut data = storage::get_strategy_data(&e, &token);
        settle(&e, &token, &mut totals, &mut data, amount);

        storage::set_totals(&e, &token, &totals);
        storage::set_strategy_data(&e, &token, &data);
        storage::extend_instance(&e);
    }
}

fn require_active_strategy(e: &Env, strategy: &Address, token: &Address) {
    strategy.require_auth();
    if storage::get_strategy(e, token).as_ref() != Some(strategy) {
        panic_with_error!(e, DegenBoxError::UnauthorizedStrategy);
    }
}

/// Book a profit or loss. Losses also reduce the strategy balance when
/// `reduce_balance` is set; an exit zeroes the balance afterwards anyway.
fn apply_delta(
    e: &Env,
    token: &Address,
    totals: &mut Totals,
    data: &mut StrategyData,
    amount: i128,
    reduce_balance: bool,
) {
    if amount > 0 {
        totals.elastic += amount;
        DegenBoxEvents::strategy_profit(e, token.clone(), amount);
    } else if amount < 0 {
        let loss = -amount;
        totals.elastic -= loss;
        if reduce_balance {
            data.balance -= loss;
        }
        DegenBoxEvents::strategy_loss(e, token.clone(), loss);
    }
}

/// Book `amount` returned by the strategy. Anything above the recorded
/// balance is profit.
fn settle(e: &Env, token: &Address, totals: &mut Totals, data: &mut StrategyData, amount: i128) {
    if amount > data.balance {
        let profit = amount - data.balance;
        totals.elastic += profit;
        data.balance = 0;
        DegenBoxEvents::strategy_profit(e, token.clone(), profit);
    } else {
        data.balance -= amount;
    }
    DegenBoxEvents::strategy_divest(e, token.clone(), amount);
}
