//! Core business logic module
//!
//! - `validation` - Amount and email predicates
//! - `shared` - Mutex-guarded account handle for multi-threaded callers
//! - `processor` - Replays operation scripts against accounts

pub mod processor;
pub mod shared;
pub mod validation;

pub use processor::{OperationProcessor, ProcessSummary};
pub use shared::SharedAccount;
pub use validation::{is_amount_valid, is_email_valid};
