pub mod error;
pub mod ledger;
pub mod message;

pub use error::{Error, HandleRole, Result};
pub use ledger::IssueLedger;
pub use message::{kind_of, Message, MessageSet};
