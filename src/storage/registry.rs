use std::collections::HashMap;

use crate::domain::Account;

/// In-memory registry of accounts, keyed by CPF.
///
/// Lookup is a direct key access; a side index keeps insertion order
/// so listing is stable for a given state. There is no persistence:
/// the registry lives for the process lifetime and a restart discards
/// everything.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
    /// CPFs in insertion order
    order: Vec<String>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cpf: &str) -> bool {
        self.accounts.contains_key(cpf)
    }

    /// Insert a new account. Returns the account back as an error when
    /// the CPF is already taken, leaving the registry untouched.
    pub fn insert(&mut self, account: Account) -> Result<&Account, Account> {
        if self.accounts.contains_key(&account.cpf) {
            return Err(account);
        }
        let cpf = account.cpf.clone();
        self.order.push(cpf.clone());
        Ok(self.accounts.entry(cpf).or_insert(account))
    }

    pub fn get(&self, cpf: &str) -> Option<&Account> {
        self.accounts.get(cpf)
    }

    pub fn get_mut(&mut self, cpf: &str) -> Option<&mut Account> {
        self.accounts.get_mut(cpf)
    }

    /// Remove an account by its CPF, dropping its whole statement.
    pub fn remove(&mut self, cpf: &str) -> Option<Account> {
        let removed = self.accounts.remove(cpf)?;
        self.order.retain(|key| key != cpf);
        Some(removed)
    }

    /// All accounts, in insertion order.
    pub fn list_all(&self) -> Vec<&Account> {
        self.order
            .iter()
            .filter_map(|cpf| self.accounts.get(cpf))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn account(cpf: &str, name: &str) -> Account {
        Account::new(cpf, name, Utc::now())
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = AccountRegistry::new();
        registry.insert(account("111", "Ana")).unwrap();

        let found = registry.get("111").unwrap();
        assert_eq!(found.name, "Ana");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_cpf_is_rejected() {
        let mut registry = AccountRegistry::new();
        registry.insert(account("111", "Ana")).unwrap();

        let rejected = registry.insert(account("111", "Impostor"));
        assert!(rejected.is_err());

        // Registry unchanged
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("111").unwrap().name, "Ana");
    }

    #[test]
    fn test_get_missing_cpf() {
        let registry = AccountRegistry::new();
        assert!(registry.get("999").is_none());
    }

    #[test]
    fn test_remove_by_cpf() {
        let mut registry = AccountRegistry::new();
        registry.insert(account("111", "Ana")).unwrap();
        registry.insert(account("222", "Bob")).unwrap();

        let removed = registry.remove("111").unwrap();
        assert_eq!(removed.cpf, "111");
        assert!(registry.get("111").is_none());
        assert_eq!(registry.len(), 1);

        // Removing again is a no-op
        assert!(registry.remove("111").is_none());
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let mut registry = AccountRegistry::new();
        registry.insert(account("333", "Carla")).unwrap();
        registry.insert(account("111", "Ana")).unwrap();
        registry.insert(account("222", "Bob")).unwrap();

        let cpfs: Vec<&str> = registry
            .list_all()
            .iter()
            .map(|a| a.cpf.as_str())
            .collect();
        assert_eq!(cpfs, vec!["333", "111", "222"]);
    }

    #[test]
    fn test_list_all_order_stable_after_remove() {
        let mut registry = AccountRegistry::new();
        registry.insert(account("1", "A")).unwrap();
        registry.insert(account("2", "B")).unwrap();
        registry.insert(account("3", "C")).unwrap();
        registry.remove("2");

        let cpfs: Vec<&str> = registry
            .list_all()
            .iter()
            .map(|a| a.cpf.as_str())
            .collect();
        assert_eq!(cpfs, vec!["1", "3"]);
    }
}
