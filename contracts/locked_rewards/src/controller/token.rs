use soroban_sdk::{ log, token, Address, Env };

use crate::errors::Errors;

/// Pulls `amount` of `asset` from `from` into contract custody.
pub fn receive(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), Errors> {
    transfer(env, asset, from, &env.current_contract_address(), amount)
}

/// Pays `amount` of `asset` out of contract custody to `to`.
pub fn send(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), Errors> {
    transfer(env, asset, &env.current_contract_address(), to, amount)
}

fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128
) -> Result<(), Errors> {
    let token_client = token::Client::new(env, asset);

    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Locked Rewards: transfer of {} {} from {} failed", amount, asset.clone(), from.clone());
            Err(Errors::TransferFailure)
        }
    }
}
