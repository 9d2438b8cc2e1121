//! Arena Tx - unsigned transaction builder for the arena Move package

pub mod domain;
pub mod shared;

// Re-export main types for convenience
pub use domain::arena::{create_arena, create_arena_checked, create_arena_in, create_arena_target};
pub use domain::transaction::{Argument, CallArg, Command, MoveCall, Transaction, TransactionDescriptor};
pub use shared::errors::{AppError, IdentifierError, TransactionError};
pub use shared::types::{ObjectId, PackageId};
