#![no_std]

mod adapter;
mod contract;
mod events;
mod router;
mod storage;

pub use contract::*;
