mod bridge;
mod degenbox;
mod farm;
mod lending_pool;
mod strategy;
mod sub_strategy;
mod swap_router;

pub use bridge::{BridgeInterface, Client as BridgeClient};
pub use degenbox::{Client as DegenBoxClient, DegenBoxInterface};
pub use farm::{Client as FarmClient, FarmInterface};
pub use lending_pool::{Client as LendingPoolClient, LendingPoolInterface};
pub use strategy::{Client as StrategyClient, StrategyInterface};
pub use sub_strategy::{Client as SubStrategyClient, SubStrategyInterface};
pub use swap_router::{Client as SwapRouterClient, SwapRouterInterface};
