use normal::constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD };
use soroban_sdk::{ contracttype, log, Address, Env, U256 };

use crate::errors::Errors;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Initialized,
    Reentrancy,
    Issuer(Address),
    AssetClass(Address),
    Stake(Address),
    Locked(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token paid out as locked balance unlocks
    pub reward_token: Address,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Result<Config, Errors> {
    let config = match env.storage().persistent().get::<_, Config>(&DataKey::Config) {
        Some(config) => config,
        None => {
            log!(env, "Locked Rewards: Config not set");
            return Err(Errors::NotInitialized);
        }
    };

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(config)
}

// ################################################################
//                           Asset Class
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AssetClass {
    /// Unlock speed per staked token, scaled by `UNIT`
    pub speed: u128,
    /// Shortest time (seconds) over which a whole locked balance may unlock
    pub min_timespan: u64,
}

impl AssetClass {
    pub fn is_known(&self) -> bool {
        self.speed != 0 && self.min_timespan != 0
    }
}

pub fn get_asset_class(env: &Env, lp_token: &Address) -> AssetClass {
    let key = DataKey::AssetClass(lp_token.clone());
    match env.storage().persistent().get::<_, AssetClass>(&key) {
        Some(asset_class) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            asset_class
        }
        None => AssetClass::default(),
    }
}

pub fn save_asset_class(env: &Env, lp_token: &Address, asset_class: &AssetClass) {
    let key = DataKey::AssetClass(lp_token.clone());
    env.storage().persistent().set(&key, asset_class);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Stake
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStake {
    pub lp_token: Address,
    pub amount: i128,
    pub last_settlement_ts: u64,
    /// `amount * speed`
    pub lp_speed: U256,
    /// `locked * UNIT / min_timespan`
    pub max_speed: U256,
}

impl UserStake {
    pub fn new(env: &Env, lp_token: Address, now: u64) -> Self {
        UserStake {
            lp_token,
            amount: 0,
            last_settlement_ts: now,
            lp_speed: U256::from_u32(env, 0),
            max_speed: U256::from_u32(env, 0),
        }
    }
}

pub fn get_stake(env: &Env, user: &Address) -> Option<UserStake> {
    let key = DataKey::Stake(user.clone());
    let stake = env.storage().persistent().get::<_, UserStake>(&key);
    if stake.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    stake
}

pub fn save_stake(env: &Env, user: &Address, stake: &UserStake) {
    let key = DataKey::Stake(user.clone());
    env.storage().persistent().set(&key, stake);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_stake(env: &Env, user: &Address) {
    env.storage().persistent().remove(&DataKey::Stake(user.clone()));
}

// ################################################################
//                         Locked Balance
// ################################################################

pub fn get_locked_balance(env: &Env, user: &Address) -> i128 {
    let key = DataKey::Locked(user.clone());
    if let Some(balance) = env.storage().persistent().get::<_, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

pub fn save_locked_balance(env: &Env, user: &Address, amount: i128) {
    let key = DataKey::Locked(user.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().persistent().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().persistent().set(&DataKey::Initialized, &true);
        env.storage()
            .persistent()
            .extend_ttl(
                &DataKey::Initialized,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT
            );
    }

    pub fn is_issuer(env: &Env, address: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Issuer(address.clone()))
            .unwrap_or(false)
    }

    pub fn save_issuer(env: &Env, address: &Address, granted: bool) {
        let key = DataKey::Issuer(address.clone());
        if granted {
            env.storage().persistent().set(&key, &true);
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        } else {
            env.storage().persistent().remove(&key);
        }
    }
}
