use soroban_sdk::{ Address, Env };

use crate::{ events::LockedRewardsEvents, storage::{ get_asset_class, save_asset_class } };

pub fn configure(env: &Env, lp_token: &Address, speed: u128, min_timespan: u64) {
    let mut asset_class = get_asset_class(env, lp_token);
    let mut changed = false;

    if asset_class.speed != speed {
        asset_class.speed = speed;
        changed = true;
    }
    if asset_class.min_timespan != min_timespan {
        asset_class.min_timespan = min_timespan;
        changed = true;
    }

    if changed {
        save_asset_class(env, lp_token, &asset_class);
    }

    LockedRewardsEvents::asset_class_configured(env, lp_token.clone(), speed, min_timespan);
}
