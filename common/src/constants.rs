// Oracle precision
pub const ORACLE_DECIMALS: u32 = 7;

// Percentages
pub const PERCENTAGE_DENOMINATOR: i128 = 100;
pub const BPS_DENOMINATOR: i128 = 10_000;
pub const MAX_TARGET_PERCENTAGE: u32 = 95;
pub const MAX_FEE_PERCENTAGE: u32 = 50;

// Time constants
pub const STRATEGY_DELAY: u64 = 2 * 7 * 24 * 3600; // 2 weeks
pub const REDEEM_COOLDOWN: u64 = 20 * 60; // 20 minutes
