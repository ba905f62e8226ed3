use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use strategy_common::StrategyStatus;
use test_suites::setup::{create_fixture_with_data, invest, INITIAL_DEPOSIT};
use test_suites::SCALAR_7;

#[test]
fn test_safe_harvest_invests_toward_target() {
    let fixture = create_fixture_with_data();
    let (strategy, farm) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();

    invest(&fixture, &strategy, 70);

    assert_eq!(farm.user_info(&0, &strategy.address), 700_000 * SCALAR_7);
    assert_eq!(strategy.position(), 700_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), 300_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&strategy.address), 0);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 700_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);
    assert_eq!(strategy.status(), StrategyStatus::Active);

    println!("✅ Safe harvest deploys the target share");
}

#[test]
fn test_lower_target_divests_to_vault() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    fixture.set_target(50);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);

    assert_eq!(strategy.position(), 500_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), 500_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 500_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);

    println!("✅ Lower target moves tokens back to the vault");
}

#[test]
fn test_safe_withdraw_returns_tokens_to_vault() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    let returned = strategy.safe_withdraw(&fixture.executor, &(100_000 * SCALAR_7));

    assert_eq!(returned, 100_000 * SCALAR_7);
    assert_eq!(strategy.position(), 600_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), 400_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 600_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_safe_withdraw_from_non_executor() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    invest(&fixture, &strategy, 70);

    strategy.safe_withdraw(&fixture.users[0], &SCALAR_7);
}

#[test]
fn test_second_safe_harvest_changes_nothing() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    let totals_before = fixture.degenbox.totals(&token);
    let data_before = fixture.degenbox.strategy_data(&token);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);

    assert_eq!(fixture.degenbox.totals(&token), totals_before);
    assert_eq!(fixture.degenbox.strategy_data(&token), data_before);
    assert_eq!(strategy.position(), 700_000 * SCALAR_7);

    println!("✅ Repeated safe harvest is a no-op");
}

#[test]
fn test_max_change_amount_limits_the_move() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    invest(&fixture, &strategy, 70);

    fixture.set_target(50);
    strategy.safe_harvest(&fixture.executor, &0, &true, &(50_000 * SCALAR_7), &false);

    assert_eq!(strategy.position(), 650_000 * SCALAR_7);
}

#[test]
fn test_max_balance_caps_the_target() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    fixture.activate_strategy(&strategy.address);
    fixture.set_target(70);

    strategy.safe_harvest(&fixture.executor, &(500_000 * SCALAR_7), &true, &0, &false);

    assert_eq!(strategy.max_balance(), 500_000 * SCALAR_7);
    assert_eq!(strategy.position(), 350_000 * SCALAR_7);
}

#[test]
fn test_vault_harvest_skims_additional_tokens() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &strategy, 70);

    fixture.set_target(80);
    fixture.degenbox.harvest(&fixture.users[1], &token, &true, &0);

    assert_eq!(strategy.position(), 800_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 800_000 * SCALAR_7);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);

    println!("✅ Vault harvest skims into the strategy");
}

#[test]
fn test_strategy_switch_exits_old_strategy() {
    let fixture = create_fixture_with_data();
    let (old_strategy, farm) = fixture.deploy_farm_strategy();
    let (new_strategy, _) = fixture.deploy_farm_strategy();
    let token = fixture.token.address.clone();
    invest(&fixture, &old_strategy, 70);

    fixture.activate_strategy(&new_strategy.address);

    assert_eq!(farm.user_info(&0, &old_strategy.address), 0);
    assert_eq!(old_strategy.position(), 0);
    assert_eq!(old_strategy.status(), StrategyStatus::Retired);
    assert_eq!(fixture.token.balance(&old_strategy.address), 0);
    assert_eq!(fixture.token.balance(&fixture.degenbox.address), INITIAL_DEPOSIT);
    assert_eq!(fixture.degenbox.strategy(&token), Some(new_strategy.address.clone()));
    assert_eq!(fixture.degenbox.strategy_data(&token).balance, 0);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT);

    println!("✅ Switching strategies drains the old one");
}

#[test]
#[should_panic(expected = "Error(Contract, #1102)")]
fn test_retired_strategy_rejects_skim() {
    let fixture = create_fixture_with_data();
    let (old_strategy, _) = fixture.deploy_farm_strategy();
    let (new_strategy, _) = fixture.deploy_farm_strategy();
    invest(&fixture, &old_strategy, 70);
    fixture.activate_strategy(&new_strategy.address);

    old_strategy.skim(&fixture.degenbox.address, &SCALAR_7);
}

#[test]
fn test_rescue_tokens_after_exit() {
    let fixture = create_fixture_with_data();
    let (old_strategy, _) = fixture.deploy_farm_strategy();
    let (new_strategy, _) = fixture.deploy_farm_strategy();
    let reward = fixture.reward_token.address.clone();
    invest(&fixture, &old_strategy, 70);

    fixture.mint(&reward, &old_strategy.address, 5 * SCALAR_7);
    let early = old_strategy.try_rescue_tokens(&reward, &fixture.owner, &(5 * SCALAR_7));
    assert_eq!(early.err(), Some(Ok(soroban_sdk::Error::from_contract_error(1103))));

    fixture.activate_strategy(&new_strategy.address);
    old_strategy.rescue_tokens(&reward, &fixture.owner, &(5 * SCALAR_7));
    assert_eq!(fixture.reward_token.balance(&fixture.owner), 5 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #1100)")]
fn test_skim_from_non_vault() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();

    strategy.skim(&fixture.users[0], &(100 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #1100)")]
fn test_withdraw_from_non_vault() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    invest(&fixture, &strategy, 70);

    strategy.withdraw(&fixture.users[0], &(100 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_safe_harvest_from_non_executor() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    fixture.activate_strategy(&strategy.address);

    strategy.safe_harvest(&fixture.users[0], &0, &true, &0, &false);
}

#[test]
fn test_executor_management() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let executor = Address::generate(&fixture.env);
    fixture.activate_strategy(&strategy.address);
    fixture.set_target(70);

    assert!(strategy.is_executor(&fixture.executor));
    assert!(!strategy.is_executor(&executor));

    strategy.set_strategy_executor(&executor, &true);
    strategy.safe_harvest(&executor, &0, &true, &0, &false);
    assert_eq!(strategy.position(), 700_000 * SCALAR_7);

    strategy.set_strategy_executor(&executor, &false);
    assert!(!strategy.is_executor(&executor));
    let result = strategy.try_safe_harvest(&executor, &0, &true, &0, &false);
    assert_eq!(result.err(), Some(Ok(soroban_sdk::Error::from_contract_error(1101))));

    // The owner is always allowed
    strategy.safe_harvest(&fixture.owner, &0, &true, &0, &false);
}
