/// Contract error codes.
///
/// # Code ranges
/// | Range   | Purpose                         |
/// |---------|---------------------------------|
/// | 1 – 9   | Lifecycle / initialisation      |
/// | 10 – 19 | Authentication & authorisation  |
/// | 20 – 29 | Resource not found              |
/// | 30 – 39 | Amount validation               |
/// | 40 – 49 | Reward channel state            |
/// | 50 – 59 | Solvency                        |
/// | 60 – 69 | Token recovery                  |
/// | 70 – 79 | Pause gate                      |
/// | 80 – 89 | Arithmetic                      |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    /// Caller is not the owner (or, where accepted, a manager).
    Unauthorized = 10,
    /// Caller is not the distributor of the reward channel it tried to fund.
    NotDistributor = 11,
    /// Caller tried to accept ownership without a matching nomination.
    NotNominated = 12,

    RewardNotFound = 20,

    /// Zero or negative amount.
    InvalidAmount = 30,
    /// Withdrawal larger than the staked balance.
    InsufficientBalance = 31,
    /// The staking token cannot double as a reward token.
    TokensIdentical = 32,

    RewardAlreadyExists = 40,
    /// Duration changes must wait for the running period to finish.
    RewardPeriodActive = 41,
    ZeroRewardsDuration = 42,

    /// Implied reward rate exceeds what custody can pay over the period.
    RewardTooHigh = 50,

    RecoveryForbidden = 60,

    Paused = 70,

    MathOverflow = 80,
}

/// Coarse failure classes, one per range in [`ContractError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lifecycle,
    Authorization,
    NotFound,
    InvalidAmount,
    State,
    Solvency,
    RecoveryForbidden,
    Paused,
    Arithmetic,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ContractError::Unauthorized
            | ContractError::NotDistributor
            | ContractError::NotNominated => ErrorCategory::Authorization,
            ContractError::RewardNotFound => ErrorCategory::NotFound,
            ContractError::InvalidAmount
            | ContractError::InsufficientBalance
            | ContractError::TokensIdentical => ErrorCategory::InvalidAmount,
            ContractError::RewardAlreadyExists
            | ContractError::RewardPeriodActive
            | ContractError::ZeroRewardsDuration => ErrorCategory::State,
            ContractError::RewardTooHigh => ErrorCategory::Solvency,
            ContractError::RecoveryForbidden => ErrorCategory::RecoveryForbidden,
            ContractError::Paused => ErrorCategory::Paused,
            ContractError::MathOverflow => ErrorCategory::Arithmetic,
        }
    }
}
