#![no_std]

mod adapters;
mod contract;
pub mod storage;
mod types;

pub use contract::*;
pub use types::*;
