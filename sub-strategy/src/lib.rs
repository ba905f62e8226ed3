#![no_std]

mod contract;
mod errors;
mod events;
mod storage;

pub use contract::*;
pub use errors::SubStrategyError;
pub use storage::SubStrategyConfig;
