//! Server application models and type definitions.
//!
//! Application state shared with every handler and type aliases for the SeaORM entity
//! models that the repositories return.

pub mod app;
pub mod db;
