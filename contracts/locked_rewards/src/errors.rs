use normal::error::ErrorCode;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Errors {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller lacks the admin or issuer capability
    Unauthorized = 3,
    /// Asset class has a zero speed or a zero minimum timespan
    UnknownAssetClass = 4,
    /// Participant is already staked in a different asset class
    AssetClassMismatch = 5,
    NoActiveStake = 6,
    InsufficientStake = 7,
    TransferFailure = 8,
    ReentrantCall = 9,
    InvalidAmount = 10,
    MathError = 11,
}

impl From<ErrorCode> for Errors {
    fn from(error: ErrorCode) -> Self {
        match error {
            ErrorCode::MathError | ErrorCode::CastingFailure => Errors::MathError,
        }
    }
}
