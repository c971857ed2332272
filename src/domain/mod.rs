mod account;
mod clock;
mod money;
mod statement;

pub use account::*;
pub use clock::*;
pub use money::*;
pub use statement::*;
