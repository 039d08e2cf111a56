//! Account model behind the bank account manager: savings and checking
//! accounts, and the ordered collection the application selects from.

mod account;
pub use account::{Account, AccountKind};
mod bank;
pub use bank::Bank;
mod error;
pub use error::Error;
