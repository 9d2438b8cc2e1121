//! Domain layer - transaction model and contract entry points

pub mod arena;
pub mod transaction;
