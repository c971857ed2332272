use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountId, EntryKind, StatementEntry, format_cents};

// ========================
// Requests
// ========================

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

/// Body shared by deposit and withdraw.
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    pub description: String,
    /// Decimal amount in currency units, e.g. 50.0 for 50.00
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// Calendar day in ISO format (YYYY-MM-DD)
    pub date: String,
}

// ========================
// Responses
// ========================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer: AccountDto,
}

#[derive(Debug, Serialize)]
pub struct CustomersResponse {
    pub customers: Vec<AccountDto>,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Decimal string, e.g. "150.00"
    pub balance: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: AccountId,
    pub cpf: String,
    pub name: String,
    pub statement: Vec<StatementEntryDto>,
}

#[derive(Debug, Serialize)]
pub struct StatementEntryDto {
    pub description: String,
    /// Decimal string, e.g. "50.00"
    pub amount: String,
    pub date: DateTime<Utc>,
    pub kind: EntryKind,
}

impl From<&StatementEntry> for StatementEntryDto {
    fn from(entry: &StatementEntry) -> Self {
        Self {
            description: entry.description.clone(),
            amount: format_cents(entry.amount_cents),
            date: entry.date,
            kind: entry.kind,
        }
    }
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            cpf: account.cpf.clone(),
            name: account.name.clone(),
            statement: account.statement.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_statement_entry_dto_formats_amount() {
        let entry = StatementEntry::new(EntryKind::Deposit, "salary", 123450, Utc::now());
        let dto = StatementEntryDto::from(&entry);

        assert_eq!(dto.amount, "1234.50");
        assert_eq!(dto.kind, EntryKind::Deposit);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["kind"], "deposit");
        assert_eq!(json["amount"], "1234.50");
    }

    #[test]
    fn test_account_dto_carries_statement() {
        let mut account = Account::new("111", "Ana", Utc::now());
        account.append(StatementEntry::new(
            EntryKind::Deposit,
            "salary",
            5000,
            Utc::now(),
        ));

        let dto = AccountDto::from(&account);
        assert_eq!(dto.cpf, "111");
        assert_eq!(dto.statement.len(), 1);
    }
}
