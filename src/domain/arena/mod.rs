//! Arena domain - transactions for the `arena` Move module

use tracing::debug;

use crate::domain::transaction::{Transaction, TransactionDescriptor, TARGET_SEPARATOR};
use crate::shared::errors::TransactionError;
use crate::shared::types::{ObjectId, PackageId};

/// Move module holding the arena entry points
pub const ARENA_MODULE: &str = "arena";

/// Entry point that opens an arena for a hero
pub const CREATE_ARENA_FUNCTION: &str = "create_arena";

/// `<package_id>::arena::create_arena`. The package id is used verbatim.
pub fn create_arena_target(package_id: &str) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        package_id,
        ARENA_MODULE,
        CREATE_ARENA_FUNCTION,
        sep = TARGET_SEPARATOR
    )
}

/// Build an unsigned transaction calling `arena::create_arena` with the hero
/// object as its only argument.
///
/// No validation is done on either id here. An id that cannot be encoded
/// fails with the error of the underlying descriptor.
pub fn create_arena(package_id: &str, hero_id: &str) -> Result<Transaction, TransactionError> {
    create_arena_in(package_id, hero_id)
}

/// [`create_arena`] against any [`TransactionDescriptor`] binding
pub fn create_arena_in<D: TransactionDescriptor>(
    package_id: &str,
    hero_id: &str,
) -> Result<D, D::Error> {
    let mut tx = D::empty()?;
    let hero = tx.object(hero_id)?;
    tx.move_call(&create_arena_target(package_id), vec![hero])?;

    debug!(package_id, hero_id, "built create_arena transaction");
    Ok(tx)
}

/// [`create_arena`] from parsed identifiers, using their canonical form
pub fn create_arena_checked(
    package_id: &PackageId,
    hero_id: &ObjectId,
) -> Result<Transaction, TransactionError> {
    create_arena(&package_id.to_string(), &hero_id.to_string())
}
