use soroban_sdk::Error;
use strategy::StrategyContractClient;
use test_suites::mocks::farm::MockFarmClient;
use test_suites::setup::{create_fixture_with_data, invest, INITIAL_DEPOSIT};
use test_suites::test_fixture::TestFixture;
use test_suites::SCALAR_7;

const REWARDS: i128 = 1_000 * SCALAR_7;

/// Farm strategy at 70% holding `REWARDS` claimed reward tokens
fn setup_with_rewards<'a>() -> (TestFixture<'a>, StrategyContractClient<'a>, MockFarmClient<'a>) {
    let fixture = create_fixture_with_data();
    let (strategy, farm) = fixture.deploy_farm_strategy();
    invest(&fixture, &strategy, 70);

    fixture.mint(&fixture.reward_token.address, &farm.address, REWARDS);
    farm.accrue(&0, &strategy.address, &REWARDS);
    strategy.safe_harvest(&fixture.executor, &0, &false, &0, &true);
    assert_eq!(fixture.reward_token.balance(&strategy.address), REWARDS);

    (fixture, strategy, farm)
}

#[test]
fn test_swap_to_lp_below_min_out_keeps_rewards() {
    let (fixture, strategy, _) = setup_with_rewards();

    let result = strategy.try_swap_to_lp(&fixture.executor, &(501 * SCALAR_7));

    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(1104))));
    assert_eq!(fixture.reward_token.balance(&strategy.address), REWARDS);
    assert_eq!(fixture.token.balance(&strategy.address), 0);

    println!("✅ Swap below the minimum output reverts");
}

#[test]
fn test_swap_to_lp_takes_fee_and_compounds() {
    let (fixture, strategy, _) = setup_with_rewards();
    let token = fixture.token.address.clone();
    strategy.set_fee_parameters(&fixture.fee_collector, &10);

    let kept = strategy.swap_to_lp(&fixture.executor, &(500 * SCALAR_7));

    assert_eq!(kept, 450 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.fee_collector), 50 * SCALAR_7);
    assert_eq!(fixture.token.balance(&strategy.address), 450 * SCALAR_7);
    assert_eq!(fixture.reward_token.balance(&strategy.address), 0);

    // The kept tokens are reported as profit by the next harvest
    strategy.safe_harvest(&fixture.executor, &0, &false, &0, &false);
    assert_eq!(fixture.degenbox.totals(&token).elastic, INITIAL_DEPOSIT + 450 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&fixture.degenbox.address),
        300_000 * SCALAR_7 + 450 * SCALAR_7
    );
    assert_eq!(fixture.token.balance(&strategy.address), 0);

    println!("✅ Rewards are compounded after the fee");
}

#[test]
fn test_swap_exact_tokens() {
    let (fixture, strategy, _) = setup_with_rewards();

    let amount_out =
        strategy.swap_exact_tokens(&fixture.executor, &fixture.reward_token.address, &(500 * SCALAR_7));

    assert_eq!(amount_out, 500 * SCALAR_7);
    assert_eq!(fixture.token.balance(&strategy.address), 500 * SCALAR_7);
}

#[test]
fn test_swap_exact_tokens_takes_fee() {
    let (fixture, strategy, _) = setup_with_rewards();
    strategy.set_fee_parameters(&fixture.fee_collector, &10);

    let kept =
        strategy.swap_exact_tokens(&fixture.executor, &fixture.reward_token.address, &(500 * SCALAR_7));

    assert_eq!(kept, 450 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.fee_collector), 50 * SCALAR_7);
    assert_eq!(fixture.token.balance(&strategy.address), 450 * SCALAR_7);
    assert_eq!(fixture.reward_token.balance(&strategy.address), 0);

    println!("✅ Swapped tokens pay the fee");
}

#[test]
fn test_swaps_rejected_after_retirement() {
    let (fixture, strategy, _) = setup_with_rewards();
    let (next_strategy, _) = fixture.deploy_farm_strategy();
    fixture.activate_strategy(&next_strategy.address);

    let retired = Some(Ok(Error::from_contract_error(1102)));
    assert_eq!(strategy.try_swap_to_lp(&fixture.executor, &0).err(), retired);
    assert_eq!(
        strategy
            .try_swap_exact_tokens(&fixture.executor, &fixture.reward_token.address, &0)
            .err(),
        retired
    );
    assert_eq!(fixture.reward_token.balance(&strategy.address), REWARDS);
    assert_eq!(fixture.token.balance(&fixture.fee_collector), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1120)")]
fn test_swap_exact_tokens_rejects_strategy_token() {
    let (fixture, strategy, _) = setup_with_rewards();

    strategy.swap_exact_tokens(&fixture.executor, &fixture.token.address, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_swap_to_lp_from_non_executor() {
    let (fixture, strategy, _) = setup_with_rewards();

    strategy.swap_to_lp(&fixture.users[0], &0);
}

#[test]
fn test_fee_collector_defaults_to_owner() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();

    assert_eq!(strategy.fee_collector(), fixture.owner);
    assert_eq!(strategy.fee_parameters().fee_percentage, 0);

    strategy.set_fee_parameters(&fixture.fee_collector, &15);
    strategy.set_fee_collector(&fixture.owner);
    assert_eq!(strategy.fee_collector(), fixture.owner);
    assert_eq!(strategy.fee_parameters().fee_percentage, 15);
}

#[test]
#[should_panic(expected = "Error(Contract, #1105)")]
fn test_fee_percentage_above_cap() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();

    strategy.set_fee_parameters(&fixture.fee_collector, &51);
}

#[test]
fn test_owner_setters_require_owner() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();

    fixture.env.set_auths(&[]);

    assert!(strategy.try_set_fee_parameters(&fixture.fee_collector, &10).is_err());
    assert!(strategy.try_set_fee_collector(&fixture.fee_collector).is_err());
    assert!(strategy.try_set_strategy_executor(&fixture.users[0], &true).is_err());
    assert!(strategy
        .try_rescue_tokens(&fixture.token.address, &fixture.users[0], &1)
        .is_err());

    println!("✅ Owner setters reject other callers");
}
