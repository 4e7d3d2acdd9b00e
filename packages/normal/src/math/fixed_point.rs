//! 256-bit fixed-point helpers.
//!
//! Rates are scaled by [`UNIT`] and stored as `U256`, so a product of two
//! values that each fit in an `i128` can never overflow the intermediate.
//! All divisions truncate toward zero.

use soroban_sdk::{ log, Env, U256 };

use crate::{
    constants::UNIT,
    error::{ ErrorCode, NormalResult },
    math::casting::Cast,
};

pub fn unit(env: &Env) -> U256 {
    U256::from_u128(env, UNIT)
}

pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// `x * y / denominator`, rounded down.
pub fn mul_div_floor(env: &Env, x: &U256, y: &U256, denominator: &U256) -> NormalResult<U256> {
    if *denominator == zero(env) {
        log!(env, "Math error: division by zero");
        return Err(ErrorCode::MathError);
    }

    Ok(x.mul(y).div(denominator))
}

/// Lifts a non-negative token amount into 256-bit space.
pub fn from_amount(env: &Env, amount: i128) -> NormalResult<U256> {
    Ok(U256::from_u128(env, amount.cast::<u128>(env)?))
}

/// Narrows a 256-bit value back into a token amount.
pub fn to_amount(env: &Env, value: &U256) -> NormalResult<i128> {
    match value.to_u128() {
        Some(v) => v.cast::<i128>(env),
        None => {
            log!(env, "Casting error: value does not fit in u128");
            Err(ErrorCode::CastingFailure)
        }
    }
}
