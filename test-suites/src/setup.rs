use crate::test_fixture::TestFixture;
use crate::SCALAR_7;
use strategy::StrategyContractClient;

pub const INITIAL_DEPOSIT: i128 = 1_000_000 * SCALAR_7;

/// Fixture with `INITIAL_DEPOSIT` in the ledger
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create();
    let user = fixture.users[0].clone();
    fixture.deposit(&user, INITIAL_DEPOSIT);
    fixture
}

/// Activate `strategy` at `target_percentage` and deploy toward the target
pub fn invest(fixture: &TestFixture, strategy: &StrategyContractClient, target_percentage: u32) {
    fixture.activate_strategy(&strategy.address);
    fixture.set_target(target_percentage);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fixture_with_data() {
        let fixture = create_fixture_with_data();
        let totals = fixture.degenbox.totals(&fixture.token.address);
        assert_eq!(totals.elastic, INITIAL_DEPOSIT);
        assert_eq!(totals.base, INITIAL_DEPOSIT);
        assert_eq!(fixture.token.balance(&fixture.degenbox.address), INITIAL_DEPOSIT);
    }
}
