//! Bridge yield source
//!
//! Deposits and redemptions go through an external bridge and settle in a
//! later transaction, when the bridge calls `on_settle`. Until then the
//! request counts toward the position at the value recorded when it was sent.

use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};
use strategy_common::{
    constants::REDEEM_COOLDOWN,
    dependencies::{BridgeClient, DegenBoxClient},
    events::StrategyEvents,
    fees, pricing, storage as common_storage, swap, PendingSettlement, SettlementKind, StrategyError,
    StrategyStatus,
};

use crate::{storage, types::BridgeSource};

pub fn skim(e: &Env, source: &BridgeSource, amount: i128) {
    let token = common_storage::get_strategy_token(e);
    swap::authorize_transfer(e, &token, &source.bridge, amount);
    let id = BridgeClient::new(e, &source.bridge).deposit_stable(&e.current_contract_address(), &amount);
    push_pending(e, id, SettlementKind::Deposit, amount);
}

/// Only settled tokens can be reported as profit; the fee is taken from them
pub fn harvest(e: &Env, source: &BridgeSource, balance: i128) -> i128 {
    let token = common_storage::get_strategy_token(e);
    let delta = position(e, source) - balance;
    if delta <= 0 {
        return delta;
    }

    let liquid = TokenClient::new(e, &token).balance(&e.current_contract_address());
    let realizable = if delta < liquid { delta } else { liquid };
    let (amount, _fee) = fees::take_fee(e, &token, realizable);
    amount
}

/// Redeem the receipt tokens worth `amount`. The proceeds go back to the
/// vault when the request settles.
pub fn withdraw(e: &Env, source: &BridgeSource, amount: i128) {
    let token = common_storage::get_strategy_token(e);
    let held = TokenClient::new(e, &source.receipt_token).balance(&e.current_contract_address());
    let wanted = pricing::convert(e, &source.oracle, &token, &source.receipt_token, amount);
    let receipts = if wanted < held { wanted } else { held };
    if receipts > 0 {
        // Valued as the drop in receipt value so the position is unchanged
        let value = receipt_value(e, source, held) - receipt_value(e, source, held - receipts);
        request_redeem(e, source, SettlementKind::Withdraw, receipts, value);
    }
}

/// Redeems every receipt token. The proceeds arrive after the strategy is
/// retired and are recovered with `rescue_tokens`.
pub fn exit(e: &Env, source: &BridgeSource) {
    let this = e.current_contract_address();
    let receipts = TokenClient::new(e, &source.receipt_token).balance(&this);
    if receipts > 0 {
        let value = receipt_value(e, source, receipts);
        request_redeem(e, source, SettlementKind::Withdraw, receipts, value);
    }
}

/// Liquid tokens, receipt tokens at the oracle rate and requests in flight
pub fn position(e: &Env, source: &BridgeSource) -> i128 {
    let this = e.current_contract_address();
    let liquid = TokenClient::new(e, &common_storage::get_strategy_token(e)).balance(&this);
    let receipts = TokenClient::new(e, &source.receipt_token).balance(&this);
    let in_flight: i128 = storage::get_pending_settlements(e)
        .iter()
        .map(|pending| pending.amount)
        .sum();
    liquid + receipt_value(e, source, receipts) + in_flight
}

/// Redeem the receipt tokens worth the earnings above the ledger balance
///
/// ### Panics
/// - `RedeemingNotReady` if called again within the cooldown
/// - `NothingToRedeem` if the position is not above `balance`
pub fn redeem_earnings(e: &Env, source: &BridgeSource, balance: i128) -> u64 {
    let now = e.ledger().timestamp();
    if let Some(last) = storage::get_last_redeem(e) {
        if now < last + REDEEM_COOLDOWN {
            panic_with_error!(e, StrategyError::RedeemingNotReady);
        }
    }

    // Earnings already on their way back are not redeemed twice
    let redeeming: i128 = storage::get_pending_settlements(e)
        .iter()
        .filter(|pending| pending.kind == SettlementKind::Redeem)
        .map(|pending| pending.amount)
        .sum();
    let earnings = position(e, source) - balance - redeeming;
    if earnings <= 0 {
        panic_with_error!(e, StrategyError::NothingToRedeem);
    }
    let token = common_storage::get_strategy_token(e);
    let receipts = pricing::convert(e, &source.oracle, &token, &source.receipt_token, earnings);
    if receipts <= 0 {
        panic_with_error!(e, StrategyError::NothingToRedeem);
    }

    storage::set_last_redeem(e, now);
    request_redeem(e, source, SettlementKind::Redeem, receipts, earnings)
}

/// Drop the settled request. Settled funds are already held by the strategy.
///
/// Settled principal is sent on to the vault while the strategy is active.
/// Earnings wait for the next harvest.
///
/// ### Panics
/// - `OnlyBridge` if `caller` is not the bridge
/// - `UnknownSettlement` if `id` is not pending
pub fn on_settle(e: &Env, source: &BridgeSource, caller: &Address, id: u64, amount: i128) {
    caller.require_auth();
    if *caller != source.bridge {
        panic_with_error!(e, StrategyError::OnlyBridge);
    }

    let mut pending = storage::get_pending_settlements(e);
    let index = match pending.iter().position(|request| request.id == id) {
        Some(index) => index as u32,
        None => panic_with_error!(e, StrategyError::UnknownSettlement),
    };
    let settled = pending.get_unchecked(index);
    pending.remove(index);
    storage::set_pending_settlements(e, &pending);

    if settled.kind == SettlementKind::Withdraw && common_storage::get_status(e) == StrategyStatus::Active {
        return_principal(e, amount);
    }
    StrategyEvents::settled(e, id, amount);
}

fn return_principal(e: &Env, amount: i128) {
    let this = e.current_contract_address();
    let token = common_storage::get_strategy_token(e);
    let token_client = TokenClient::new(e, &token);
    let liquid = token_client.balance(&this);
    let actual = if amount < liquid { amount } else { liquid };
    if actual <= 0 {
        return;
    }

    let vault = common_storage::get_vault(e);
    token_client.transfer(&this, &vault, &actual);
    DegenBoxClient::new(e, &vault).settle_divest(&this, &token, &actual);
    StrategyEvents::withdraw(e, amount, actual);
}

fn request_redeem(e: &Env, source: &BridgeSource, kind: SettlementKind, receipts: i128, value: i128) -> u64 {
    swap::authorize_transfer(e, &source.receipt_token, &source.bridge, receipts);
    let id = BridgeClient::new(e, &source.bridge).redeem_stable(&e.current_contract_address(), &receipts);
    push_pending(e, id, kind, value);
    id
}

fn push_pending(e: &Env, id: u64, kind: SettlementKind, amount: i128) {
    let mut pending = storage::get_pending_settlements(e);
    pending.push_back(PendingSettlement {
        id,
        kind,
        amount,
        requested_at: e.ledger().timestamp(),
    });
    storage::set_pending_settlements(e, &pending);
    StrategyEvents::settlement_requested(e, id, kind, amount);
}

fn receipt_value(e: &Env, source: &BridgeSource, receipts: i128) -> i128 {
    let token = common_storage::get_strategy_token(e);
    pricing::convert(e, &source.oracle, &source.receipt_token, &token, receipts)
}
