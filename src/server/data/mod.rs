//! Data access layer.
//!
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! `ConnectionTrait`, so they accept either a `DatabaseConnection` or a transaction.

pub mod catalog;
