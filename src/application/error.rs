use thiserror::Error;

use crate::domain::{AmountError, Cents};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    #[error("Insufficient funds for {cpf}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        cpf: String,
        balance: Cents,
        requested: Cents,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
