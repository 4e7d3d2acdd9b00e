use normal::safe_increment;
use soroban_sdk::{ log, Address, Env };

use crate::{
    controller::{ settlement::settle, token },
    errors::Errors,
    events::LockedRewardsEvents,
    math::unlock,
    storage::{ get_asset_class, get_locked_balance, get_stake, save_locked_balance, save_stake, Config },
};

pub fn deposit(
    env: &Env,
    config: &Config,
    issuer: &Address,
    user: &Address,
    amount: i128
) -> Result<i128, Errors> {
    let mut stake = get_stake(env, user);

    let released = match stake.as_mut() {
        Some(stake) => settle(env, config, user, stake)?,
        None => 0,
    };

    let mut locked = get_locked_balance(env, user);
    safe_increment!(locked, amount);
    save_locked_balance(env, user, locked);

    // max_speed only exists on a stake record; the first stake computes it
    if let Some(mut stake) = stake {
        let asset_class = get_asset_class(env, &stake.lp_token);
        stake.max_speed = unlock::max_speed(env, locked, &asset_class)?;
        save_stake(env, user, &stake);
    }

    token::receive(env, &config.reward_token, issuer, amount)?;

    LockedRewardsEvents::deposit_locked(env, issuer.clone(), user.clone(), amount, released);

    Ok(released)
}

pub fn claim(env: &Env, config: &Config, user: &Address) -> Result<i128, Errors> {
    let mut stake = match get_stake(env, user) {
        Some(stake) => stake,
        None => {
            log!(env, "Locked Rewards: Claim: {} has no active stake", user.clone());
            return Err(Errors::NoActiveStake);
        }
    };

    let released = settle(env, config, user, &mut stake)?;

    LockedRewardsEvents::claim(env, user.clone(), released);

    Ok(released)
}
