//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! engine. Repositories provide an abstraction layer over database
//! operations, organized per record type. Repositories that participate in
//! transactional read-modify-write or batched reconciliation are generic
//! over [`sea_orm::ConnectionTrait`] so the same methods run against the
//! shared connection or an open transaction.

pub mod champion;
pub mod player;
pub mod squad;
pub mod tournament;
pub mod tournament_match;
