// HTTP adapter - translates wire requests into LedgerService calls.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
