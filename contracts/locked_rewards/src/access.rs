use normal::validate;
use soroban_sdk::{ Address, Env };

use crate::{ errors::Errors, storage::{ get_config, utils::is_issuer } };

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    /// Configures asset classes and manages issuers
    Admin,
    /// Deposits locked rewards on behalf of participants
    Issuer,
}

fn has_capability(env: &Env, caller: &Address, capability: Capability) -> Result<bool, Errors> {
    match capability {
        Capability::Admin => Ok(get_config(env)?.admin == *caller),
        Capability::Issuer => Ok(is_issuer(env, caller)),
    }
}

pub fn require_capability(
    env: &Env,
    caller: &Address,
    capability: Capability
) -> Result<(), Errors> {
    validate!(
        env,
        has_capability(env, caller, capability)?,
        Errors::Unauthorized,
        "Locked Rewards: {} is not authorized",
        caller.clone()
    )
}
