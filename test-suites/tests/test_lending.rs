use soroban_sdk::Error;
use test_suites::setup::{create_fixture_with_data, invest, INITIAL_DEPOSIT};
use test_suites::SCALAR_7;

#[test]
fn test_lending_interest_is_reported_as_profit() {
    let fixture = create_fixture_with_data();
    let (strategy, pool) = fixture.deploy_lending_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);
    assert_eq!(pool.balance(&strategy.address), 700_000 * SCALAR_7);

    fixture.mint(&token, &pool.address, 10_000 * SCALAR_7);
    pool.accrue_interest(&strategy.address, &(10_000 * SCALAR_7));
    strategy.safe_harvest(&fixture.executor, &0, &false, &0, &false);

    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT + 10_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), 310_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 700_000 * SCALAR_7);
    assert_eq!(strategy.position(), 700_000 * SCALAR_7);

    println!("✅ Lending interest reaches the vault");
}

#[test]
fn test_lending_loss_reduces_balance() {
    let fixture = create_fixture_with_data();
    let (strategy, pool) = fixture.deploy_lending_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    pool.slash(&strategy.address, &(20_000 * SCALAR_7));
    strategy.safe_harvest(&fixture.executor, &0, &false, &0, &false);

    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT - 20_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 680_000 * SCALAR_7);
    assert_eq!(strategy.position(), 680_000 * SCALAR_7);
}

#[test]
fn test_lending_rewards_are_claimed_and_swapped() {
    let fixture = create_fixture_with_data();
    let (strategy, pool) = fixture.deploy_lending_strategy();
    invest(&fixture, &strategy, 70);

    fixture.mint(&fixture.reward_token.address, &pool.address, 200 * SCALAR_7);
    pool.set_rewards(&strategy.address, &(200 * SCALAR_7));
    strategy.safe_harvest(&fixture.executor, &0, &false, &0, &true);
    assert_eq!(fixture.reward_token.balance(&strategy.address), 200 * SCALAR_7);

    let kept = strategy.swap_to_lp(&fixture.executor, &(100 * SCALAR_7));
    assert_eq!(kept, 100 * SCALAR_7);
    assert_eq!(fixture.token.balance(&strategy.address), 100 * SCALAR_7);
}

#[test]
fn test_lending_exit_returns_interest() {
    let fixture = create_fixture_with_data();
    let (old_strategy, pool) = fixture.deploy_lending_strategy();
    let (new_strategy, _) = fixture.deploy_lending_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &old_strategy, 70);

    fixture.mint(&token, &pool.address, 5_000 * SCALAR_7);
    pool.accrue_interest(&old_strategy.address, &(5_000 * SCALAR_7));
    fixture.activate_strategy(&new_strategy.address);

    assert_eq!(pool.balance(&old_strategy.address), 0);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT + 5_000 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&fixture.degenbox.address),
        INITIAL_DEPOSIT + 5_000 * SCALAR_7
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1106)")]
fn test_divest_short_delivery_reverts() {
    let fixture = create_fixture_with_data();
    let (strategy, pool) = fixture.deploy_lending_strategy();
    invest(&fixture, &strategy, 70);

    // The pool keeps 1% of every withdrawal
    pool.set_withdraw_fee(&100);
    fixture.set_target(50);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);
}

#[test]
fn test_short_divest_leaves_state_unchanged() {
    let fixture = create_fixture_with_data();
    let (strategy, pool) = fixture.deploy_lending_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    pool.set_withdraw_fee(&100);
    fixture.set_target(50);
    let result = strategy.try_safe_harvest(&fixture.executor, &0, &true, &0, &false);

    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(1106))));
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 700_000 * SCALAR_7);
    assert_eq!(pool.balance(&strategy.address), 700_000 * SCALAR_7);

    pool.set_withdraw_fee(&0);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 500_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), 500_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);

    println!("✅ A short divest reverts and a full one settles");
}
