//! Server application core modules.
//!
//! This module contains all server-side functionality for the datacore: the relational
//! catalog (repositories over SeaORM), the services that shape catalog rows into API
//! projections, the JSON API controllers with their OpenAPI documentation, configuration,
//! and process startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
