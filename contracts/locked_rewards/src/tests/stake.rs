extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{ AuthorizedFunction, AuthorizedInvocation },
    vec,
    IntoVal,
    Symbol,
    U256,
};

use super::setup::{ Setup, UNIT };
use crate::{ errors::Errors, storage::UserStake };

#[test]
fn stake_binds_user_to_asset_class() {
    let setup = Setup::new();
    let env = &setup.env;
    let user = setup.user();

    setup.mint_lp(&setup.lp_token, &user, 500);
    assert_eq!(setup.contract.stake(&user, &setup.lp_token.address, &500), 0);

    assert_eq!(
        env.auths(),
        std::vec![
            (
                user.clone(),
                AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.contract.address.clone(),
                        Symbol::new(env, "stake"),
                        (user.clone(), setup.lp_token.address.clone(), 500_i128).into_val(env),
                    )),
                    sub_invocations: std::vec![AuthorizedInvocation {
                        function: AuthorizedFunction::Contract((
                            setup.lp_token.address.clone(),
                            symbol_short!("transfer"),
                            (user.clone(), setup.contract.address.clone(), 500_i128).into_val(env),
                        )),
                        sub_invocations: std::vec![],
                    }],
                },
            ),
        ]
    );

    assert_eq!(
        setup.contract.query_stake(&user),
        Some(UserStake {
            lp_token: setup.lp_token.address.clone(),
            amount: 500,
            last_settlement_ts: 0,
            lp_speed: U256::from_u128(env, 1_000 * UNIT),
            max_speed: U256::from_u32(env, 0),
        })
    );
    assert_eq!(setup.lp_token.balance(&user), 0);
    assert_eq!(setup.lp_token.balance(&setup.contract.address), 500);
}

#[test]
fn stake_more_of_same_class_settles_first() {
    let setup = Setup::new();
    let env = &setup.env;
    let user = setup.user();

    setup.deposit(&user, 1_000);
    setup.stake(&user, 100);

    setup.jump(10);
    // 10 per second (capped by max_speed) for 10 seconds
    assert_eq!(setup.stake(&user, 100), 100);

    assert_eq!(
        setup.contract.query_stake(&user),
        Some(UserStake {
            lp_token: setup.lp_token.address.clone(),
            amount: 200,
            last_settlement_ts: 10,
            lp_speed: U256::from_u128(env, 400 * UNIT),
            max_speed: U256::from_u128(env, 9 * UNIT),
        })
    );
    assert_eq!(setup.contract.query_locked(&user), 900);
    assert_eq!(setup.reward_token.balance(&user), 100);
    assert_eq!(setup.lp_token.balance(&setup.contract.address), 200);
}

#[test]
fn stake_second_asset_class_should_fail() {
    let setup = Setup::new();
    let user = setup.user();
    let other_lp_token = setup.add_asset_class(UNIT, 50);

    setup.stake(&user, 100);
    setup.mint_lp(&other_lp_token, &user, 100);

    assert_eq!(
        setup.contract.try_stake(&user, &other_lp_token.address, &100),
        Err(Ok(Errors::AssetClassMismatch))
    );

    let stake = setup.contract.query_stake(&user).unwrap();
    assert_eq!(stake.lp_token, setup.lp_token.address);
    assert_eq!(stake.amount, 100);
    assert_eq!(other_lp_token.balance(&user), 100);
}

#[test]
fn stake_unknown_asset_class_should_fail() {
    let setup = Setup::new();
    let user = setup.user();

    let unconfigured = setup.add_asset_class(0, 0);
    setup.mint_lp(&unconfigured, &user, 100);
    assert_eq!(
        setup.contract.try_stake(&user, &unconfigured.address, &100),
        Err(Ok(Errors::UnknownAssetClass))
    );

    let no_timespan = setup.add_asset_class(UNIT, 0);
    setup.mint_lp(&no_timespan, &user, 100);
    assert_eq!(
        setup.contract.try_stake(&user, &no_timespan.address, &100),
        Err(Ok(Errors::UnknownAssetClass))
    );

    let no_speed = setup.add_asset_class(0, 100);
    setup.mint_lp(&no_speed, &user, 100);
    assert_eq!(
        setup.contract.try_stake(&user, &no_speed.address, &100),
        Err(Ok(Errors::UnknownAssetClass))
    );

    assert_eq!(setup.contract.query_stake(&user), None);
}

#[test]
fn stake_non_positive_amount_should_fail() {
    let setup = Setup::new();
    let user = setup.user();

    assert_eq!(
        setup.contract.try_stake(&user, &setup.lp_token.address, &0),
        Err(Ok(Errors::InvalidAmount))
    );
    assert_eq!(
        setup.contract.try_stake(&user, &setup.lp_token.address, &-5),
        Err(Ok(Errors::InvalidAmount))
    );
}

#[test]
fn stake_without_funds_rolls_back() {
    let setup = Setup::new();
    let user = setup.user();

    setup.mint_lp(&setup.lp_token, &user, 100);

    assert_eq!(
        setup.contract.try_stake(&user, &setup.lp_token.address, &500),
        Err(Ok(Errors::TransferFailure))
    );
    assert_eq!(setup.contract.query_stake(&user), None);
    assert_eq!(setup.lp_token.balance(&user), 100);
}

#[test]
fn unstake_partial_recomputes_speeds() {
    let setup = Setup::new();
    let env = &setup.env;
    let user = setup.user();

    setup.deposit(&user, 1_000);
    setup.stake(&user, 500);

    setup.jump(10);
    assert_eq!(setup.contract.unstake(&user, &setup.lp_token.address, &498), 100);

    assert_eq!(
        setup.contract.query_stake(&user),
        Some(UserStake {
            lp_token: setup.lp_token.address.clone(),
            amount: 2,
            last_settlement_ts: 10,
            lp_speed: U256::from_u128(env, 4 * UNIT),
            max_speed: U256::from_u128(env, 9 * UNIT),
        })
    );
    assert_eq!(setup.lp_token.balance(&user), 498);
    assert_eq!(setup.lp_token.balance(&setup.contract.address), 2);

    // now bound by lp_speed: 4 per second
    setup.jump(10);
    assert_eq!(setup.contract.claim(&user), 40);
    assert_eq!(setup.contract.query_locked(&user), 860);
}

#[test]
fn unstake_everything_frees_asset_class() {
    let setup = Setup::new();
    let user = setup.user();

    setup.stake(&user, 100);
    assert_eq!(setup.contract.unstake(&user, &setup.lp_token.address, &100), 0);

    assert_eq!(setup.contract.query_stake(&user), None);
    assert_eq!(setup.lp_token.balance(&user), 100);
    assert_eq!(
        setup.contract.try_claim(&user),
        Err(Ok(Errors::NoActiveStake))
    );

    let other_lp_token = setup.add_asset_class(UNIT, 50);
    setup.mint_lp(&other_lp_token, &user, 30);
    setup.contract.stake(&user, &other_lp_token.address, &30);

    let stake = setup.contract.query_stake(&user).unwrap();
    assert_eq!(stake.lp_token, other_lp_token.address);
    assert_eq!(stake.amount, 30);
}

#[test]
fn unstake_keeps_locked_balance() {
    let setup = Setup::new();
    let user = setup.user();

    setup.deposit(&user, 1_000);
    setup.stake(&user, 100);

    setup.jump(20);
    assert_eq!(setup.contract.unstake(&user, &setup.lp_token.address, &100), 200);
    assert_eq!(setup.contract.query_locked(&user), 800);

    // nothing unlocks while unstaked
    setup.jump(1_000);
    assert_eq!(setup.contract.query_claimable(&user), 0);

    setup.stake(&user, 100);
    assert_eq!(setup.contract.query_locked(&user), 800);
    assert_eq!(setup.contract.query_stake(&user).unwrap().last_settlement_ts, setup.now());
}

#[test]
fn unstake_more_than_staked_should_fail() {
    let setup = Setup::new();
    let user = setup.user();

    setup.deposit(&user, 1_000);
    setup.stake(&user, 100);
    let before = setup.contract.query_stake(&user);

    setup.jump(10);
    assert_eq!(
        setup.contract.try_unstake(&user, &setup.lp_token.address, &101),
        Err(Ok(Errors::InsufficientStake))
    );

    assert_eq!(setup.contract.query_stake(&user), before);
    assert_eq!(setup.contract.query_locked(&user), 1_000);
    assert_eq!(setup.reward_token.balance(&user), 0);
    assert_eq!(setup.lp_token.balance(&setup.contract.address), 100);
}

#[test]
fn unstake_without_stake_should_fail() {
    let setup = Setup::new();
    let user = setup.user();

    assert_eq!(
        setup.contract.try_unstake(&user, &setup.lp_token.address, &1),
        Err(Ok(Errors::NoActiveStake))
    );
}

#[test]
fn unstake_other_asset_class_should_fail() {
    let setup = Setup::new();
    let user = setup.user();
    let other_lp_token = setup.add_asset_class(UNIT, 50);

    setup.stake(&user, 100);

    assert_eq!(
        setup.contract.try_unstake(&user, &other_lp_token.address, &100),
        Err(Ok(Errors::AssetClassMismatch))
    );
    assert_eq!(setup.contract.query_stake(&user).unwrap().amount, 100);
}

#[test]
fn stake_and_unstake_emit_events() {
    let setup = Setup::new();
    let env = &setup.env;
    let user = setup.user();

    setup.deposit(&user, 1_000);

    setup.stake(&user, 100);
    assert_eq!(
        setup.last_event(),
        vec![
            env,
            (
                setup.contract.address.clone(),
                (Symbol::new(env, "stake"), user.clone()).into_val(env),
                (setup.lp_token.address.clone(), 100_i128, 0_i128).into_val(env),
            )
        ]
    );

    setup.jump(10);
    setup.stake(&user, 50);
    assert_eq!(
        setup.last_event(),
        vec![
            env,
            (
                setup.contract.address.clone(),
                (Symbol::new(env, "stake"), user.clone()).into_val(env),
                (setup.lp_token.address.clone(), 50_i128, 100_i128).into_val(env),
            )
        ]
    );

    // max_speed is now 9 per second
    setup.jump(10);
    setup.contract.unstake(&user, &setup.lp_token.address, &150);
    assert_eq!(
        setup.last_event(),
        vec![
            env,
            (
                setup.contract.address.clone(),
                (Symbol::new(env, "unstake"), user.clone()).into_val(env),
                (setup.lp_token.address.clone(), 150_i128, 90_i128).into_val(env),
            )
        ]
    );
}
