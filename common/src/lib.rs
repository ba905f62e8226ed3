#![no_std]

pub mod access;
pub mod base;
pub mod constants;
pub mod dependencies;
mod errors;
pub mod events;
pub mod fees;
pub mod pricing;
pub mod storage;
pub mod swap;
mod types;

pub use errors::StrategyError;
pub use types::*;
