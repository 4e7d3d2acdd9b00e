use normal::{ safe_decrement, safe_increment, validate };
use soroban_sdk::{ log, Address, Env };

use crate::{
    controller::{ settlement::settle, token },
    errors::Errors,
    events::LockedRewardsEvents,
    math::unlock,
    storage::{
        get_asset_class,
        get_locked_balance,
        get_stake,
        remove_stake,
        save_stake,
        AssetClass,
        Config,
        UserStake,
    },
};

fn get_known_asset_class(env: &Env, lp_token: &Address) -> Result<AssetClass, Errors> {
    let asset_class = get_asset_class(env, lp_token);

    validate!(
        env,
        asset_class.is_known(),
        Errors::UnknownAssetClass,
        "Locked Rewards: {} is not a configured asset class",
        lp_token.clone()
    )?;

    Ok(asset_class)
}

fn refresh_speeds(
    env: &Env,
    user: &Address,
    stake: &mut UserStake,
    asset_class: &AssetClass
) -> Result<(), Errors> {
    let locked = get_locked_balance(env, user);
    stake.max_speed = unlock::max_speed(env, locked, asset_class)?;
    stake.lp_speed = unlock::lp_speed(env, stake.amount, asset_class)?;

    Ok(())
}

pub fn add_stake(
    env: &Env,
    config: &Config,
    user: &Address,
    lp_token: &Address,
    amount: i128
) -> Result<i128, Errors> {
    let asset_class = get_known_asset_class(env, lp_token)?;

    let (mut stake, released) = match get_stake(env, user) {
        Some(mut stake) => {
            validate!(
                env,
                stake.lp_token == *lp_token,
                Errors::AssetClassMismatch,
                "Locked Rewards: Stake: already staked in {}",
                stake.lp_token.clone()
            )?;

            let released = settle(env, config, user, &mut stake)?;
            (stake, released)
        }
        None => (UserStake::new(env, lp_token.clone(), env.ledger().timestamp()), 0),
    };

    safe_increment!(stake.amount, amount);
    refresh_speeds(env, user, &mut stake, &asset_class)?;
    save_stake(env, user, &stake);

    token::receive(env, lp_token, user, amount)?;

    LockedRewardsEvents::stake(env, user.clone(), lp_token.clone(), amount, released);

    Ok(released)
}

pub fn remove_stake_amount(
    env: &Env,
    config: &Config,
    user: &Address,
    lp_token: &Address,
    amount: i128
) -> Result<i128, Errors> {
    let asset_class = get_known_asset_class(env, lp_token)?;

    let mut stake = match get_stake(env, user) {
        Some(stake) => stake,
        None => {
            log!(env, "Locked Rewards: Unstake: {} has no active stake", user.clone());
            return Err(Errors::NoActiveStake);
        }
    };

    validate!(
        env,
        stake.lp_token == *lp_token,
        Errors::AssetClassMismatch,
        "Locked Rewards: Unstake: staked in {}",
        stake.lp_token.clone()
    )?;
    validate!(
        env,
        amount <= stake.amount,
        Errors::InsufficientStake,
        "Locked Rewards: Unstake: requested {} but only {} staked",
        amount,
        stake.amount
    )?;

    let released = settle(env, config, user, &mut stake)?;

    safe_decrement!(stake.amount, amount);

    if stake.amount == 0 {
        remove_stake(env, user);
    } else {
        refresh_speeds(env, user, &mut stake, &asset_class)?;
        save_stake(env, user, &stake);
    }

    token::send(env, lp_token, user, amount)?;

    LockedRewardsEvents::unstake(env, user.clone(), lp_token.clone(), amount, released);

    Ok(released)
}
