use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DegenBoxError {
    // Amount validation errors
    ZeroAmount = 1000,
    InsufficientShares = 1001,
    InsufficientLiquidity = 1002,

    // Strategy management errors
    TooEarly = 1003,
    InvalidTargetPercentage = 1004,
    UnauthorizedStrategy = 1005,
    NoStrategy = 1006,
    InvalidStrategy = 1007,
}
