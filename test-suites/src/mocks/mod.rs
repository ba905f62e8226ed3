//! Stand-ins for the external contracts strategies plug into

pub mod bridge;
pub mod farm;
pub mod lending_pool;
pub mod swap_router;
