use soroban_sdk::{contracttype, Address};

/// Staking farm paying a reward token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FarmSource {
    pub farm: Address,
    pub pool_id: u32,
    pub reward_token: Address,
    pub swap_router: Address,
}

/// Lending pool with an incentive reward token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LendingSource {
    pub pool: Address,
    pub reward_token: Address,
    pub swap_router: Address,
}

/// Asynchronous bridge into an interest bearing receipt token
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BridgeSource {
    pub bridge: Address,
    pub receipt_token: Address,
    pub oracle: Address, // SEP-40 feed pricing both the receipt and the strategy token
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum YieldSource {
    Farm(FarmSource),
    Lending(LendingSource),
    Bridge(BridgeSource),
}
