//! Service layer for business logic.
//!
//! Services coordinate repositories and shape rows into the DTOs returned by the API
//! surface. Seeding of the canonical catalog records also lives here.

pub mod catalog;
pub mod seed;
