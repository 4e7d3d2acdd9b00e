use soroban_sdk::{ log, Env };

use crate::error::{ ErrorCode, NormalResult };

/// Checked subtraction that logs and surfaces `ErrorCode::MathError` instead
/// of wrapping or panicking.
pub trait SafeMath: Sized {
    fn safe_sub(self, rhs: Self, env: &Env) -> NormalResult<Self>;
}

macro_rules! checked_impl {
    ($($t:ty),+) => {
        $(
            impl SafeMath for $t {
                fn safe_sub(self, rhs: $t, env: &Env) -> NormalResult<$t> {
                    match self.checked_sub(rhs) {
                        Some(result) => Ok(result),
                        None => {
                            log!(env, "Math error: {} - {} out of range", self, rhs);
                            Err(ErrorCode::MathError)
                        }
                    }
                }
            }
        )+
    };
}

checked_impl!(u64, i128);
