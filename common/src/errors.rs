use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Authorization
    OnlyBentoBox = 1100,
    OnlyExecutor = 1101,

    // Lifecycle
    StrategyExited = 1102,
    NotExited = 1103,

    // Slippage
    InsufficientAmountOut = 1104,

    // Parameters
    InvalidFeePercentage = 1105,
    BalanceDecreased = 1106,

    // Sub-strategy routing
    NotHandlingStrategyToken = 1110,
    AlreadyCurrent = 1111,
    InvalidIndex = 1112,
    SlippageTooHigh = 1113,
    InvalidSubStrategy = 1114,
    DeadlineExpired = 1115,
    SwitchIncomplete = 1116,

    // Yield sources
    UnsupportedOperation = 1120,
    RedeemingNotReady = 1121,
    NothingToRedeem = 1122,
    UnknownSettlement = 1123,
    OnlyBridge = 1124,
    InvalidAmount = 1125,
    PriceNotFound = 1126,
}
