use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money entering the account
    Deposit,
    /// Money leaving the account
    Withdraw,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Withdraw => "withdraw",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single movement recorded on an account's statement.
/// Entries are immutable once appended - corrections are made by
/// appending further entries, never by editing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub description: String,
    /// Magnitude of the movement in cents (always non-negative;
    /// the sign is implied by `kind`)
    pub amount_cents: Cents,
    /// When the entry was recorded
    pub date: DateTime<Utc>,
    pub kind: EntryKind,
}

impl StatementEntry {
    pub fn new(
        kind: EntryKind,
        description: impl Into<String>,
        amount_cents: Cents,
        date: DateTime<Utc>,
    ) -> Self {
        debug_assert!(amount_cents >= 0, "entry amount must be non-negative");
        Self {
            description: description.into(),
            amount_cents,
            date,
            kind,
        }
    }

    /// The signed contribution of this entry to the account balance.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            EntryKind::Deposit => self.amount_cents,
            EntryKind::Withdraw => -self.amount_cents,
        }
    }

    /// The calendar day this entry was recorded on, in the server's
    /// local time zone.
    pub fn local_day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

/// Compute the balance of a statement.
/// Balance = sum of deposits - sum of withdrawals
///
/// The fold saturates rather than wrapping, so a pathologically large
/// statement clamps at the `i64` range instead of flipping sign and
/// breaking the sufficient-funds check.
pub fn compute_balance(entries: &[StatementEntry]) -> Cents {
    entries.iter().fold(0, |balance, entry| {
        balance.saturating_add(entry.signed_amount())
    })
}

/// Filter a statement down to the entries recorded on a given calendar
/// day (local time zone). Order is preserved.
pub fn entries_on(entries: &[StatementEntry], day: NaiveDate) -> Vec<StatementEntry> {
    entries
        .iter()
        .filter(|entry| entry.local_day() == day)
        .cloned()
        .collect()
}
