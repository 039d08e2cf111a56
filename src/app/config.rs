use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Form preferences kept between runs. Accounts are never stored.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub account_type: AccountType,
    pub rate_or_fee: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_type: AccountType::Savings,
            rate_or_fee: "0.00".to_owned(),
        }
    }
}

/// Scratch input of the current session.
pub struct Input {
    pub name: String,
    pub initial_amount: String,
    pub amount: String,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            name: String::new(),
            initial_amount: "0.00".to_owned(),
            amount: "0.00".to_owned(),
        }
    }
}

#[derive(Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
}

impl Display for AccountType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Checking => write!(f, "Checking"),
        }
    }
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Savings, AccountType::Checking];

    /// Label of the rate/fee field for this account type.
    pub fn parameter(self) -> &'static str {
        match self {
            AccountType::Savings => "Interest rate",
            AccountType::Checking => "Fee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_default() {
        let cfg: Config = serde_yaml::from_str("account_type: Checking\n").unwrap();
        assert_eq!(cfg.account_type, AccountType::Checking);
        assert_eq!(cfg.rate_or_fee, "0.00");

        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.account_type, AccountType::Savings);
    }

    #[test]
    fn stored_config_is_restored() {
        let cfg = Config {
            account_type: AccountType::Checking,
            rate_or_fee: "2.50".to_owned(),
        };
        let raw = serde_yaml::to_string(&cfg).unwrap();
        let restored: Config = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(restored.account_type, AccountType::Checking);
        assert_eq!(restored.rate_or_fee, "2.50");
    }
}
