#![no_std]

mod contract;
mod errors;
mod events;
pub mod rebalance;
mod storage;

pub use contract::{DegenBox, DegenBoxClient, DegenBoxContract, DegenBoxContractClient};
pub use errors::DegenBoxError;
