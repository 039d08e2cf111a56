use rust_decimal::Decimal;

/// Failures of account operations. None of them change a balance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("insufficient funds: {required:.2} required, {available:.2} available")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("amount must not be negative: {0:.2}")]
    NegativeAmount(Decimal),

    #[error("balance out of range")]
    Overflow,

    #[error("interest only accrues on savings accounts")]
    NotSavings,

    #[error("no account selected")]
    NoSelection,
}
