use soroban_sdk::{panic_with_error, Address, Env};
use stellar_access::ownable;

use crate::{errors::StrategyError, events::StrategyEvents, storage, types::StrategyStatus};

/// Require `caller` to be the bound vault
pub fn require_vault(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != storage::get_vault(e) {
        panic_with_error!(e, StrategyError::OnlyBentoBox);
    }
}

/// Require `caller` to be the owner or a registered executor
pub fn require_executor(e: &Env, caller: &Address) {
    caller.require_auth();
    if ownable::get_owner(e).as_ref() == Some(caller) {
        return;
    }
    if !storage::is_executor(e, caller) {
        panic_with_error!(e, StrategyError::OnlyExecutor);
    }
}

pub fn require_active(e: &Env) {
    if storage::get_status(e) == StrategyStatus::Retired {
        panic_with_error!(e, StrategyError::StrategyExited);
    }
}

pub fn require_exited(e: &Env) {
    if storage::get_status(e) != StrategyStatus::Retired {
        panic_with_error!(e, StrategyError::NotExited);
    }
}

/// Add or remove an executor. Owner auth is checked by the caller.
pub fn set_strategy_executor(e: &Env, executor: &Address, allowed: bool) {
    storage::set_executor(e, executor, allowed);
    StrategyEvents::set_executor(e, executor.clone(), allowed);
}
