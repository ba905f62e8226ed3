use soroban_sdk::{Env, Symbol};

pub struct HarvesterEvents {}

impl HarvesterEvents {
    /// Emitted after a batch of safe harvests
    ///
    /// - topics - `["safe_harvests"]`
    /// - data - `count: u32`
    pub fn safe_harvests(e: &Env, count: u32) {
        let topics = (Symbol::new(e, "safe_harvests"),);
        e.events().publish(topics, count);
    }
}
