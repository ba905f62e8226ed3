use combine_harvester::{CombineHarvester, CombineHarvesterClient};
use soroban_sdk::testutils::{storage::Instance as _, Ledger};
use soroban_sdk::{vec as svec, Vec};
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::TestFixture;
use test_suites::SCALAR_7;

fn deploy_harvester<'a>(fixture: &TestFixture) -> CombineHarvesterClient<'a> {
    let harvester_id = fixture.env.register(CombineHarvester, (fixture.owner.clone(),));
    CombineHarvesterClient::new(&fixture.env, &harvester_id)
}

#[test]
fn test_batch_safe_harvest() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;
    fixture.activate_strategy(&strategy.address);
    fixture.set_target(70);
    strategy.set_strategy_executor(&harvester.address, &true);

    harvester.execute_safe_harvests(
        &svec![e, strategy.address.clone()],
        &svec![e, true],
        &svec![e, 0i128],
        &svec![e, 0i128],
        &svec![e, false],
        &svec![e, false],
        &svec![e, 0i128],
    );

    assert_eq!(strategy.position(), 700_000 * SCALAR_7);
    assert_eq!(harvester.owner(), Some(fixture.owner.clone()));

    println!("✅ Harvester drives the strategy");
}

#[test]
fn test_batch_swaps_rewards() {
    let fixture = create_fixture_with_data();
    let (strategy, farm) = fixture.deploy_farm_strategy();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;
    fixture.activate_strategy(&strategy.address);
    fixture.set_target(70);
    strategy.set_strategy_executor(&harvester.address, &true);
    strategy.safe_harvest(&fixture.executor, &0, &true, &0, &false);

    fixture.mint(&fixture.reward_token.address, &farm.address, 100 * SCALAR_7);
    farm.accrue(&0, &strategy.address, &(100 * SCALAR_7));

    harvester.execute_safe_harvests(
        &svec![e, strategy.address.clone()],
        &svec![e, false],
        &svec![e, 0i128],
        &svec![e, 0i128],
        &svec![e, true],
        &svec![e, true],
        &svec![e, 50 * SCALAR_7],
    );

    assert_eq!(fixture.reward_token.balance(&strategy.address), 0);
    assert_eq!(fixture.token.balance(&strategy.address), 50 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #1300)")]
fn test_length_mismatch() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;

    harvester.execute_safe_harvests(
        &svec![e, strategy.address.clone()],
        &svec![e, true, false],
        &svec![e, 0i128],
        &svec![e, 0i128],
        &svec![e, false],
        &svec![e, false],
        &svec![e, 0i128],
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_unregistered_harvester() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;
    fixture.activate_strategy(&strategy.address);

    harvester.execute_safe_harvests(
        &svec![e, strategy.address.clone()],
        &svec![e, true],
        &svec![e, 0i128],
        &svec![e, 0i128],
        &svec![e, false],
        &svec![e, false],
        &svec![e, 0i128],
    );
}

#[test]
fn test_non_owner_cannot_execute() {
    let fixture = create_fixture_with_data();
    let (strategy, _) = fixture.deploy_farm_strategy();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;
    fixture.activate_strategy(&strategy.address);
    strategy.set_strategy_executor(&harvester.address, &true);

    e.set_auths(&[]);
    let result = harvester.try_execute_safe_harvests(
        &svec![e, strategy.address.clone()],
        &svec![e, true],
        &svec![e, 0i128],
        &svec![e, 0i128],
        &svec![e, false],
        &svec![e, false],
        &svec![e, 0i128],
    );
    assert!(result.is_err());
}

#[test]
fn test_batch_extends_instance_ttl() {
    let fixture = create_fixture_with_data();
    let harvester = deploy_harvester(&fixture);
    let e = &fixture.env;
    let one_day_ledgers = 17280;

    // About 10 days of rent left
    e.ledger().with_mut(|li| li.sequence_number += 110 * one_day_ledgers);
    harvester.execute_safe_harvests(
        &Vec::new(e),
        &Vec::new(e),
        &Vec::new(e),
        &Vec::new(e),
        &Vec::new(e),
        &Vec::new(e),
        &Vec::new(e),
    );

    let ttl = e.as_contract(&harvester.address, || e.storage().instance().get_ttl());
    assert!(ttl >= 30 * one_day_ledgers);
}
