use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::domain::{
    Account, Cents, Clock, EntryKind, StatementEntry, SystemClock, entries_on,
};
use crate::storage::AccountRegistry;

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (HTTP API, tests, etc.).
///
/// The registry is a shared mutable resource: writes (create, rename,
/// remove, deposit, withdraw) take the write lock and are mutually
/// exclusive, reads run concurrently against a consistent snapshot.
/// No operation holds a lock across an await point - everything here
/// is synchronous and memory-only.
pub struct LedgerService {
    registry: RwLock<AccountRegistry>,
    clock: Arc<dyn Clock>,
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerService {
    /// Create a service with an empty registry and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a service with an injected clock, useful for
    /// deterministic timestamps in tests.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: RwLock::new(AccountRegistry::new()),
            clock,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AccountRegistry> {
        // Poisoning only happens if a panic escaped while holding the
        // lock, which leaves no registry state worth preserving.
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AccountRegistry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }

    // ========================
    // Account operations
    // ========================

    /// Create a new account for the given CPF.
    pub fn create_account(&self, cpf: &str, name: &str) -> Result<Account, AppError> {
        let mut registry = self.write();
        if registry.contains(cpf) {
            return Err(AppError::AccountAlreadyExists(cpf.to_string()));
        }

        let account = Account::new(cpf, name, self.clock.now());
        let inserted = registry
            .insert(account)
            .map_err(|account| AppError::AccountAlreadyExists(account.cpf))?;
        Ok(inserted.clone())
    }

    /// Look up an account by CPF.
    pub fn find_account(&self, cpf: &str) -> Result<Account, AppError> {
        self.read()
            .get(cpf)
            .cloned()
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))
    }

    /// All accounts, in creation order.
    pub fn list_accounts(&self) -> Vec<Account> {
        self.read().list_all().into_iter().cloned().collect()
    }

    /// Change an account's display name. The CPF is immutable.
    pub fn rename_account(&self, cpf: &str, new_name: &str) -> Result<Account, AppError> {
        let mut registry = self.write();
        let account = registry
            .get_mut(cpf)
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))?;
        account.name = new_name.to_string();
        Ok(account.clone())
    }

    /// Delete an account and its entire statement.
    pub fn remove_account(&self, cpf: &str) -> Result<(), AppError> {
        self.write()
            .remove(cpf)
            .map(|_| ())
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a deposit on the account's statement.
    pub fn deposit(
        &self,
        cpf: &str,
        description: &str,
        amount_cents: Cents,
    ) -> Result<StatementEntry, AppError> {
        validate_amount(amount_cents)?;

        let mut registry = self.write();
        let account = registry
            .get_mut(cpf)
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))?;

        let entry = StatementEntry::new(
            EntryKind::Deposit,
            description,
            amount_cents,
            self.clock.now(),
        );
        account.append(entry.clone());
        Ok(entry)
    }

    /// Record a withdrawal. Fails when the balance does not cover the
    /// amount; a failed withdrawal leaves the statement untouched.
    pub fn withdraw(
        &self,
        cpf: &str,
        description: &str,
        amount_cents: Cents,
    ) -> Result<StatementEntry, AppError> {
        validate_amount(amount_cents)?;

        let mut registry = self.write();
        let account = registry
            .get_mut(cpf)
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))?;

        let balance = account.balance();
        if balance < amount_cents {
            return Err(AppError::InsufficientFunds {
                cpf: cpf.to_string(),
                balance,
                requested: amount_cents,
            });
        }

        let entry = StatementEntry::new(
            EntryKind::Withdraw,
            description,
            amount_cents,
            self.clock.now(),
        );
        account.append(entry.clone());
        Ok(entry)
    }

    /// Current balance for an account.
    pub fn balance(&self, cpf: &str) -> Result<Cents, AppError> {
        self.read()
            .get(cpf)
            .map(Account::balance)
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))
    }

    /// Full statement for an account, in insertion order.
    pub fn statement(&self, cpf: &str) -> Result<Vec<StatementEntry>, AppError> {
        self.read()
            .get(cpf)
            .map(|account| account.statement.clone())
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))
    }

    /// Statement entries recorded on a given calendar day (local time
    /// zone), in insertion order.
    pub fn statement_on(&self, cpf: &str, day: NaiveDate) -> Result<Vec<StatementEntry>, AppError> {
        self.read()
            .get(cpf)
            .map(|account| entries_on(&account.statement, day))
            .ok_or_else(|| AppError::AccountNotFound(cpf.to_string()))
    }
}

fn validate_amount(amount_cents: Cents) -> Result<(), AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidInput(
            "Amount must be positive".to_string(),
        ));
    }
    Ok(())
}
