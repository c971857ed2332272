use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, StatementEntry, compute_balance};

pub type AccountId = Uuid;

/// A customer account, identified externally by its CPF (tax id) and
/// internally by a generated id. The CPF is the lookup key and never
/// changes; the display name may be updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// External unique identifier, supplied by the caller at creation
    pub cpf: String,
    pub name: String,
    /// Append-only log of movements, in insertion order
    pub statement: Vec<StatementEntry>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(cpf: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf: cpf.into(),
            name: name.into(),
            statement: Vec::new(),
            created_at,
        }
    }

    /// Append an entry to the statement log.
    pub fn append(&mut self, entry: StatementEntry) {
        self.statement.push(entry);
    }

    /// Current balance, derived by replaying the statement.
    pub fn balance(&self) -> Cents {
        compute_balance(&self.statement)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::EntryKind;

    use super::*;

    #[test]
    fn test_new_account_has_empty_statement() {
        let account = Account::new("12345678900", "Ana", Utc::now());
        assert!(account.statement.is_empty());
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_accounts_get_distinct_ids() {
        let a = Account::new("111", "Ana", Utc::now());
        let b = Account::new("222", "Bob", Utc::now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_balance_replays_statement() {
        let mut account = Account::new("111", "Ana", Utc::now());
        account.append(StatementEntry::new(
            EntryKind::Deposit,
            "salary",
            20000,
            Utc::now(),
        ));
        account.append(StatementEntry::new(
            EntryKind::Withdraw,
            "groceries",
            5000,
            Utc::now(),
        ));

        assert_eq!(account.balance(), 15000);
    }
}
