use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;
use tracing::{info, warn};

use crate::Error;

/// The variant of an account, together with the one parameter that sets it
/// apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Interest rate as a fraction, `0.05` being 5%.
    Savings { rate: Decimal },
    /// Charged on top of every withdrawal.
    Checking { fee: Decimal },
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::Savings { .. } => write!(f, "Savings"),
            AccountKind::Checking { .. } => write!(f, "Checking"),
        }
    }
}

/// A bank account.
///
/// The balance only moves through [`deposit`](Self::deposit),
/// [`withdraw`](Self::withdraw) and [`apply_interest`](Self::apply_interest).
/// A failed operation leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    owner: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal, kind: AccountKind) -> Self {
        Self {
            owner: owner.into(),
            balance,
            kind,
        }
    }

    pub fn savings(owner: impl Into<String>, balance: Decimal, rate: Decimal) -> Self {
        Self::new(owner, balance, AccountKind::Savings { rate })
    }

    pub fn checking(owner: impl Into<String>, balance: Decimal, fee: Decimal) -> Self {
        Self::new(owner, balance, AccountKind::Checking { fee })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeAmount`] for a negative `amount`, [`Error::Overflow`]
    /// if the result does not fit in a [`Decimal`].
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        non_negative(amount)?;
        self.balance = self.balance.checked_add(amount).ok_or(Error::Overflow)?;
        info!(owner = %self.owner, %amount, balance = %self.balance, "deposit");
        Ok(self.balance)
    }

    /// Takes `amount` out of the account, plus the fee for checking accounts,
    /// and returns the new balance.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientFunds`] when the balance does not cover the
    /// amount and fee, [`Error::NegativeAmount`] for a negative `amount` or
    /// fee.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        non_negative(amount)?;
        let required = match self.kind {
            AccountKind::Savings { .. } => amount,
            AccountKind::Checking { fee } => {
                non_negative(fee)?;
                amount.checked_add(fee).ok_or(Error::Overflow)?
            }
        };

        if required > self.balance {
            warn!(owner = %self.owner, %required, balance = %self.balance, "withdrawal refused");
            return Err(Error::InsufficientFunds {
                required,
                available: self.balance,
            });
        }

        self.balance -= required;
        info!(owner = %self.owner, %amount, balance = %self.balance, "withdraw");
        Ok(self.balance)
    }

    /// Credits one period of interest on a savings account and returns the
    /// amount credited. Interest is rounded to cents, half away from zero.
    ///
    /// # Errors
    ///
    /// [`Error::NotSavings`] for checking accounts, [`Error::NegativeAmount`]
    /// for a negative rate, [`Error::Overflow`] if the balance leaves the
    /// [`Decimal`] range.
    pub fn apply_interest(&mut self) -> Result<Decimal, Error> {
        let AccountKind::Savings { rate } = self.kind else {
            return Err(Error::NotSavings);
        };
        non_negative(rate)?;

        let interest = self
            .balance
            .checked_mul(rate)
            .map(|d| d.round_dp_with_strategy(2, MidpointAwayFromZero))
            .ok_or(Error::Overflow)?;
        self.balance = self.balance.checked_add(interest).ok_or(Error::Overflow)?;
        info!(owner = %self.owner, %interest, balance = %self.balance, "interest");
        Ok(interest)
    }

    /// Display line for the account list, e.g.
    /// `[Savings] Alice | Balance: 100.00`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | Balance: {:.2}",
            self.kind,
            self.owner,
            self.balance.round_dp_with_strategy(2, MidpointAwayFromZero)
        )
    }
}

fn non_negative(amount: Decimal) -> Result<(), Error> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::NegativeAmount(amount));
    }
    Ok(())
}
