//! Accounts and the read-only account registry.
//!
//! The registry resolves the owning-account id carried by an event row. An
//! id that resolves to nothing is not an error: the row is still counted,
//! just without a concrete owner.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// An account known to the enclosing application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: CompactString,
}

impl Account {
    pub fn new(id: i64, username: impl Into<CompactString>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// The owner of an event summary.
///
/// `Anonymous` stands in both for an unresolvable account id and for the
/// state after two distinct accounts triggered the same event kind. Once a
/// summary goes anonymous it stays anonymous for the rest of that snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    Account(Account),
    Anonymous,
}

impl Owner {
    /// The account id when the owner is concrete.
    pub fn account_id(&self) -> Option<i64> {
        match self {
            Owner::Account(account) => Some(account.id),
            Owner::Anonymous => None,
        }
    }
}

/// Read-only lookup of accounts by id.
///
/// A user has a handful of accounts at most, so this is a `Vec` scanned
/// linearly rather than a hash map.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Resolve an account id to an [`Owner`].
    ///
    /// Unknown ids yield [`Owner::Anonymous`], never an error.
    pub fn owner_from_id(&self, account_id: i64) -> Owner {
        self.accounts
            .iter()
            .find(|account| account.id == account_id)
            .map_or(Owner::Anonymous, |account| Owner::Account(account.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_id_resolves_to_account() {
        let registry = AccountRegistry::new(vec![
            Account::new(1, "alice@example.org"),
            Account::new(2, "bob@example.org"),
        ]);
        let owner = registry.owner_from_id(2);
        assert_eq!(owner.account_id(), Some(2));
    }

    #[test]
    fn test_unknown_id_resolves_to_anonymous() {
        let registry = AccountRegistry::new(vec![Account::new(1, "alice@example.org")]);
        assert_eq!(registry.owner_from_id(42), Owner::Anonymous);
        assert_eq!(AccountRegistry::default().owner_from_id(1), Owner::Anonymous);
    }
}
