use normal::{ constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD }, validate };
use soroban_sdk::{ contract, contractimpl, contractmeta, Address, Env };

use crate::{
    access::{ require_capability, Capability },
    controller,
    errors::Errors,
    events::LockedRewardsEvents,
    guard::ReentrancyGuard,
    locked_rewards::LockedRewardsTrait,
    math::unlock,
    msg::ConfigResponse,
    storage::{
        get_asset_class,
        get_config,
        get_locked_balance,
        get_stake,
        save_config,
        utils::{ is_initialized, is_issuer, save_issuer, set_initialized },
        AssetClass,
        Config,
        UserStake,
    },
};

contractmeta!(
    key = "Description",
    val = "Locked rewards that unlock at a speed driven by the holder's LP stake"
);

#[contract]
pub struct LockedRewards;

fn check_positive_amount(env: &Env, amount: i128) -> Result<(), Errors> {
    validate!(
        env,
        amount > 0,
        Errors::InvalidAmount,
        "Locked Rewards: amount must be positive, got {}",
        amount
    )
}

fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contractimpl]
impl LockedRewardsTrait for LockedRewards {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), Errors> {
        validate!(
            &env,
            !is_initialized(&env),
            Errors::AlreadyInitialized,
            "Locked Rewards: Initialize: initializing contract twice is not allowed"
        )?;

        set_initialized(&env);

        save_config(&env, Config {
            admin: admin.clone(),
            reward_token: reward_token.clone(),
        });

        LockedRewardsEvents::initialize(&env, admin, reward_token);

        Ok(())
    }

    fn set_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        require_capability(&env, &sender, Capability::Admin)?;

        let config = get_config(&env)?;
        save_config(&env, Config {
            admin: new_admin.clone(),
            ..config
        });

        LockedRewardsEvents::admin_changed(&env, sender, new_admin);

        Ok(())
    }

    fn grant_issuer(env: Env, sender: Address, issuer: Address) -> Result<(), Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        require_capability(&env, &sender, Capability::Admin)?;

        save_issuer(&env, &issuer, true);
        LockedRewardsEvents::issuer_granted(&env, sender, issuer);

        Ok(())
    }

    fn revoke_issuer(env: Env, sender: Address, issuer: Address) -> Result<(), Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        require_capability(&env, &sender, Capability::Admin)?;

        save_issuer(&env, &issuer, false);
        LockedRewardsEvents::issuer_revoked(&env, sender, issuer);

        Ok(())
    }

    fn configure(
        env: Env,
        sender: Address,
        lp_token: Address,
        speed: u128,
        min_timespan: u64
    ) -> Result<(), Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        require_capability(&env, &sender, Capability::Admin)?;

        controller::registry::configure(&env, &lp_token, speed, min_timespan);

        Ok(())
    }

    // ################################################################
    //                             ISSUER
    // ################################################################

    fn deposit_locked(
        env: Env,
        sender: Address,
        user: Address,
        amount: i128
    ) -> Result<i128, Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        require_capability(&env, &sender, Capability::Issuer)?;
        check_positive_amount(&env, amount)?;

        let _guard = ReentrancyGuard::acquire(&env)?;
        let config = get_config(&env)?;

        controller::locked::deposit(&env, &config, &sender, &user, amount)
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn stake(env: Env, sender: Address, lp_token: Address, amount: i128) -> Result<i128, Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        check_positive_amount(&env, amount)?;

        let _guard = ReentrancyGuard::acquire(&env)?;
        let config = get_config(&env)?;

        controller::stake::add_stake(&env, &config, &sender, &lp_token, amount)
    }

    fn unstake(env: Env, sender: Address, lp_token: Address, amount: i128) -> Result<i128, Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        check_positive_amount(&env, amount)?;

        let _guard = ReentrancyGuard::acquire(&env)?;
        let config = get_config(&env)?;

        controller::stake::remove_stake_amount(&env, &config, &sender, &lp_token, amount)
    }

    fn claim(env: Env, sender: Address) -> Result<i128, Errors> {
        sender.require_auth();
        extend_instance_ttl(&env);

        let _guard = ReentrancyGuard::acquire(&env)?;
        let config = get_config(&env)?;

        controller::locked::claim(&env, &config, &sender)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Result<ConfigResponse, Errors> {
        extend_instance_ttl(&env);
        Ok(ConfigResponse {
            config: get_config(&env)?,
        })
    }

    fn query_admin(env: Env) -> Result<Address, Errors> {
        extend_instance_ttl(&env);
        Ok(get_config(&env)?.admin)
    }

    fn query_is_issuer(env: Env, address: Address) -> bool {
        extend_instance_ttl(&env);
        is_issuer(&env, &address)
    }

    fn query_asset_class(env: Env, lp_token: Address) -> AssetClass {
        extend_instance_ttl(&env);
        get_asset_class(&env, &lp_token)
    }

    fn query_stake(env: Env, address: Address) -> Option<UserStake> {
        extend_instance_ttl(&env);
        get_stake(&env, &address)
    }

    fn query_locked(env: Env, address: Address) -> i128 {
        extend_instance_ttl(&env);
        get_locked_balance(&env, &address)
    }

    fn query_claimable(env: Env, address: Address) -> Result<i128, Errors> {
        extend_instance_ttl(&env);

        match get_stake(&env, &address) {
            Some(stake) => {
                let locked = get_locked_balance(&env, &address);
                Ok(unlock::releasable(&env, &stake, locked, env.ledger().timestamp())?)
            }
            None => Ok(0),
        }
    }
}
