use soroban_sdk::{ Address, Env, Symbol };

pub struct LockedRewardsEvents {}

impl LockedRewardsEvents {
    // Admin Events

    /// Emitted when the contract is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `reward_token: Address`
    pub fn initialize(env: &Env, admin: Address, reward_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, reward_token);
    }

    /// Emitted when the admin hands over the admin capability
    ///
    /// - topics - `["admin_changed", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn admin_changed(env: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "admin_changed"), admin);
        env.events().publish(topics, new_admin);
    }

    /// - topics - `["issuer_granted", admin: Address]`
    /// - data - `issuer: Address`
    pub fn issuer_granted(env: &Env, admin: Address, issuer: Address) {
        let topics = (Symbol::new(env, "issuer_granted"), admin);
        env.events().publish(topics, issuer);
    }

    /// - topics - `["issuer_revoked", admin: Address]`
    /// - data - `issuer: Address`
    pub fn issuer_revoked(env: &Env, admin: Address, issuer: Address) {
        let topics = (Symbol::new(env, "issuer_revoked"), admin);
        env.events().publish(topics, issuer);
    }

    /// Emitted whenever an asset class is (re)configured, even if nothing changed
    ///
    /// - topics - `["asset_class_configured", lp_token: Address]`
    /// - data - `[speed: u128, min_timespan: u64]`
    pub fn asset_class_configured(env: &Env, lp_token: Address, speed: u128, min_timespan: u64) {
        let topics = (Symbol::new(env, "asset_class_configured"), lp_token);
        env.events().publish(topics, (speed, min_timespan));
    }

    // User Events

    /// Emitted when an issuer locks rewards for a user
    ///
    /// - topics - `["deposit_locked", issuer: Address, user: Address]`
    /// - data - `[amount: i128, released: i128]`
    pub fn deposit_locked(env: &Env, issuer: Address, user: Address, amount: i128, released: i128) {
        let topics = (Symbol::new(env, "deposit_locked"), issuer, user);
        env.events().publish(topics, (amount, released));
    }

    /// - topics - `["stake", user: Address]`
    /// - data - `[lp_token: Address, amount: i128, released: i128]`
    pub fn stake(env: &Env, user: Address, lp_token: Address, amount: i128, released: i128) {
        let topics = (Symbol::new(env, "stake"), user);
        env.events().publish(topics, (lp_token, amount, released));
    }

    /// - topics - `["unstake", user: Address]`
    /// - data - `[lp_token: Address, amount: i128, released: i128]`
    pub fn unstake(env: &Env, user: Address, lp_token: Address, amount: i128, released: i128) {
        let topics = (Symbol::new(env, "unstake"), user);
        env.events().publish(topics, (lp_token, amount, released));
    }

    /// - topics - `["claim", user: Address]`
    /// - data - `released: i128`
    pub fn claim(env: &Env, user: Address, released: i128) {
        let topics = (Symbol::new(env, "claim"), user);
        env.events().publish(topics, released);
    }
}
