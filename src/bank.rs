use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{Account, Error};

/// The accounts opened in this session, in the order they were opened, and
/// the one currently selected for transactions.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
    selected: Option<usize>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an account and returns its index.
    pub fn open(&mut self, account: Account) -> usize {
        info!(account = %account, "opened");
        self.accounts.push(account);
        self.accounts.len() - 1
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Selects the account at `index`. An index past the end clears the
    /// selection and returns `false`.
    pub fn select(&mut self, index: usize) -> bool {
        self.selected = (index < self.accounts.len()).then_some(index);
        debug!(selected = ?self.selected, "select");
        self.selected.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|&i| i < self.accounts.len())
    }

    pub fn selected(&self) -> Option<(usize, &Account)> {
        let index = self.selected_index()?;
        self.accounts.get(index).map(|account| (index, account))
    }

    fn selected_mut(&mut self) -> Result<&mut Account, Error> {
        self.selected_index()
            .and_then(|index| self.accounts.get_mut(index))
            .ok_or(Error::NoSelection)
    }

    /// Deposits into the selected account.
    ///
    /// # Errors
    ///
    /// [`Error::NoSelection`], or whatever [`Account::deposit`] returns.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.selected_mut()?.deposit(amount)
    }

    /// Withdraws from the selected account.
    ///
    /// # Errors
    ///
    /// [`Error::NoSelection`], or whatever [`Account::withdraw`] returns.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.selected_mut()?.withdraw(amount)
    }

    /// Credits interest on the selected account.
    ///
    /// # Errors
    ///
    /// [`Error::NoSelection`], or whatever [`Account::apply_interest`]
    /// returns.
    pub fn apply_interest(&mut self) -> Result<Decimal, Error> {
        self.selected_mut()?.apply_interest()
    }

    /// Credits interest on every savings account and returns the total
    /// credited. Checking accounts are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] from the first account whose balance would leave
    /// the [`Decimal`] range. Accounts before it keep their interest.
    pub fn apply_interest_all(&mut self) -> Result<Decimal, Error> {
        let mut total = Decimal::ZERO;
        for account in &mut self.accounts {
            match account.apply_interest() {
                Ok(interest) => total = total.checked_add(interest).ok_or(Error::Overflow)?,
                Err(Error::NotSavings) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }
}
