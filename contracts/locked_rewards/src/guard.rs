use normal::validate;
use soroban_sdk::Env;

use crate::{ errors::Errors, storage::DataKey };

/// Marks a mutating operation as in flight for the lifetime of the value.
///
/// The flag lives in instance storage and is cleared on drop, so every exit
/// path of the holder releases it.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, Errors> {
        let in_progress = env
            .storage()
            .instance()
            .get::<_, bool>(&DataKey::Reentrancy)
            .unwrap_or(false);

        validate!(
            env,
            !in_progress,
            Errors::ReentrantCall,
            "Locked Rewards: another operation is already in progress"
        )?;

        env.storage().instance().set(&DataKey::Reentrancy, &true);

        Ok(ReentrancyGuard { env: env.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Reentrancy);
    }
}
