use soroban_sdk::{ Address, Env };

use crate::{ errors::Errors, msg::ConfigResponse, storage::{ AssetClass, UserStake } };

pub trait LockedRewardsTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), Errors>;

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), Errors>;

    fn grant_issuer(env: Env, sender: Address, issuer: Address) -> Result<(), Errors>;

    fn revoke_issuer(env: Env, sender: Address, issuer: Address) -> Result<(), Errors>;

    fn configure(
        env: Env,
        sender: Address,
        lp_token: Address,
        speed: u128,
        min_timespan: u64
    ) -> Result<(), Errors>;

    // ################################################################
    //                             ISSUER
    // ################################################################

    fn deposit_locked(
        env: Env,
        sender: Address,
        user: Address,
        amount: i128
    ) -> Result<i128, Errors>;

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, lp_token: Address, amount: i128) -> Result<i128, Errors>;

    fn unstake(env: Env, sender: Address, lp_token: Address, amount: i128) -> Result<i128, Errors>;

    fn claim(env: Env, sender: Address) -> Result<i128, Errors>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<ConfigResponse, Errors>;

    fn query_admin(env: Env) -> Result<Address, Errors>;

    fn query_is_issuer(env: Env, address: Address) -> bool;

    fn query_asset_class(env: Env, lp_token: Address) -> AssetClass;

    fn query_stake(env: Env, address: Address) -> Option<UserStake>;

    fn query_locked(env: Env, address: Address) -> i128;

    fn query_claimable(env: Env, address: Address) -> Result<i128, Errors>;
}
