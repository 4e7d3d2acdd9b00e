use normal::math::safe_math::SafeMath;
use soroban_sdk::{ log, Address, Env };

use crate::{
    controller::token,
    errors::Errors,
    math::unlock,
    storage::{ get_locked_balance, save_locked_balance, save_stake, Config, UserStake },
};

/// Closes the books for `user` up to the current ledger timestamp.
///
/// Releases `min(locked, min(lp_speed, max_speed) * elapsed / UNIT)` out of the
/// locked balance and pays it out in the reward token. The new settlement
/// timestamp and the reduced balance are persisted before the payout transfer
/// is issued, so a nested settlement in the same ledger releases nothing.
pub fn settle(
    env: &Env,
    config: &Config,
    user: &Address,
    stake: &mut UserStake
) -> Result<i128, Errors> {
    let now = env.ledger().timestamp();
    let locked = get_locked_balance(env, user);

    let released = unlock::releasable(env, stake, locked, now)?;

    stake.last_settlement_ts = now;
    save_stake(env, user, stake);

    if released > 0 {
        save_locked_balance(env, user, locked.safe_sub(released, env)?);

        log!(env, "Locked Rewards: Settle: released {} of {} locked", released, locked);

        token::send(env, &config.reward_token, user, released)?;
    }

    Ok(released)
}
