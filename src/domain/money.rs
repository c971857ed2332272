use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a human-readable decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Upper bound for a single wire amount: one trillion units. Keeps
/// individual entries far below `i64::MAX` cents so statement sums
/// cannot overflow through valid input.
pub const MAX_AMOUNT_CENTS: Cents = 100_000_000_000_000;

/// Convert a wire-level amount (a JSON number) into cents.
/// Example: 50.0 -> 5000, 12.5 -> 1250
///
/// Rejects non-finite and negative values and amounts above
/// `MAX_AMOUNT_CENTS`. Whether zero is acceptable is up to the caller.
pub fn cents_from_amount(amount: f64) -> Result<Cents, AmountError> {
    if !amount.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if amount < 0.0 {
        return Err(AmountError::Negative);
    }
    let cents = (amount * 100.0).round();
    if cents > MAX_AMOUNT_CENTS as f64 {
        return Err(AmountError::OutOfRange);
    }
    Ok(cents as Cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    NotFinite,
    Negative,
    OutOfRange,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::NotFinite => write!(f, "amount must be a finite number"),
            AmountError::Negative => write!(f, "amount must not be negative"),
            AmountError::OutOfRange => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for AmountError {}
