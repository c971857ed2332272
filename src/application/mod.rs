// Application layer - orchestration over the domain and registry.
// The HTTP adapter translates wire requests into these calls.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
