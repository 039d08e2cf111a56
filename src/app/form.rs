use anyhow::{anyhow, bail, Result};
use bank_manager::Account;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::ToZero;

use crate::app::config::AccountType;

/// Parses a money amount, dropping anything past the cents.
pub fn parse_amount(field: &str, text: &str) -> Result<Decimal> {
    let v = text
        .trim()
        .parse::<Decimal>()
        .map_err(|e| anyhow!("{field} is not a number: {e}"))?
        .round_dp_with_strategy(2, ToZero);

    if v.is_sign_negative() && !v.is_zero() {
        bail!("{field} must not be negative")
    }
    // a hundred billion is a typo, not a deposit
    if v >= Decimal::new(1000_0000_0000, 0) {
        bail!("{field} must be below 100000000000")
    }
    Ok(v)
}

/// Parses an interest rate given as a fraction, `0.05` being 5%.
pub fn parse_rate(text: &str) -> Result<Decimal> {
    let v = text
        .trim()
        .parse::<Decimal>()
        .map_err(|e| anyhow!("Interest rate is not a number: {e}"))?;

    if v.is_sign_negative() && !v.is_zero() {
        bail!("Interest rate must not be negative")
    }
    if v > Decimal::ONE {
        bail!("Interest rate is a fraction, {v} would be more than 100%")
    }
    Ok(v)
}

/// Builds the account described by the "Add Account" form.
pub fn new_account(
    account_type: AccountType,
    name: &str,
    initial_amount: &str,
    rate_or_fee: &str,
) -> Result<Account> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Name must not be empty")
    }

    let balance = parse_amount("Initial amount", initial_amount)?;
    let account = match account_type {
        AccountType::Savings => Account::savings(name, balance, parse_rate(rate_or_fee)?),
        AccountType::Checking => Account::checking(name, balance, parse_amount("Fee", rate_or_fee)?),
    };
    Ok(account)
}
