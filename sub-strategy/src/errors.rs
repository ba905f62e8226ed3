use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SubStrategyError {
    Unauthorized = 1200,
    InvalidAmount = 1201,
}
