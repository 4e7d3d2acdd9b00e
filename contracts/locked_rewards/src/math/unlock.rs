use core::cmp::min;

use normal::{
    error::NormalResult,
    math::{ casting::Cast, fixed_point::{ from_amount, mul_div_floor, to_amount, unit }, safe_math::SafeMath },
};
use soroban_sdk::{ Env, U256 };

use crate::storage::{ AssetClass, UserStake };

/// Unlock rate contributed by `amount` staked tokens of `asset_class`.
pub fn lp_speed(env: &Env, amount: i128, asset_class: &AssetClass) -> NormalResult<U256> {
    Ok(from_amount(env, amount)?.mul(&U256::from_u128(env, asset_class.speed)))
}

/// Rate at which `locked` would fully unlock over the class minimum timespan.
pub fn max_speed(env: &Env, locked: i128, asset_class: &AssetClass) -> NormalResult<U256> {
    mul_div_floor(
        env,
        &from_amount(env, locked)?,
        &unit(env),
        &U256::from_u128(env, asset_class.min_timespan.cast::<u128>(env)?)
    )
}

pub fn effective_speed(stake: &UserStake) -> U256 {
    min(stake.lp_speed.clone(), stake.max_speed.clone())
}

/// Amount of `locked` released between the last settlement and `now`.
pub fn releasable(env: &Env, stake: &UserStake, locked: i128, now: u64) -> NormalResult<i128> {
    let elapsed = now.safe_sub(stake.last_settlement_ts, env)?;

    let unlocked = mul_div_floor(
        env,
        &effective_speed(stake),
        &U256::from_u128(env, elapsed.cast::<u128>(env)?),
        &unit(env)
    )?;

    to_amount(env, &min(unlocked, from_amount(env, locked)?))
}
