use soroban_sdk::{contracttype, Address};

/// Share accounting of a token held by the ledger
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Totals {
    pub elastic: i128, // Tokens owned by share holders, including the strategy balance
    pub base: i128,    // Shares outstanding
}

/// Ledger view of the strategy bound to a token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StrategyData {
    pub strategy_start_date: u64, // Earliest confirm time of a pending strategy, 0 if none
    pub target_percentage: u32,   // Share of elastic the strategy should hold (0-95)
    pub balance: i128,            // Principal the ledger believes is deployed
}

/// Movement the ledger decided on after a strategy reported its delta
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct RebalanceOrder {
    pub invest: i128, // Already transferred to the strategy
    pub divest: i128, // Expected back from the strategy
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum StrategyStatus {
    Active = 0,
    Harvesting = 1,
    Retired = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeeParameters {
    pub fee_collector: Address,
    pub fee_percentage: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum SettlementKind {
    Deposit = 0,
    Redeem = 1,   // Earnings, reported by the next harvest
    Withdraw = 2, // Principal, returned to the vault on settlement
}

/// An asynchronous bridge request awaiting settlement
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingSettlement {
    pub id: u64,
    pub kind: SettlementKind,
    pub amount: i128,      // Strategy token value at request time
    pub requested_at: u64,
}

/// Amount moved by one side of a sub-strategy switch and its oracle value
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SwitchAmounts {
    pub amount: i128,
    pub value: i128,
}
