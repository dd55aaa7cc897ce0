use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Insufficient balance!")]
    InsufficientBalance,

    #[error("Credit limit exceeded!")]
    CreditLimitExceeded,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Balance would exceed the representable range")]
    BalanceOverflow,

    #[error("Credit limit cannot be negative")]
    NegativeCreditLimit,
}

impl CardError {
    /// Whether the error is the "not enough money" kind, as opposed to a rejected input.
    pub const fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientBalance | Self::CreditLimitExceeded)
    }
}
