//! Marshal Check-in Core - domain logic for event marshal check-in.
//!
//! This crate provides the logic shared by the check-in backend's HTTP
//! handlers and the `checkin` command-line tools.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no table
//! storage, no HTTP. Callers batch-load an event's collections and pass them
//! in, which keeps every operation testable and free of per-marshal queries.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and role/check-in enums
//! - [`geo`] - Point-in-polygon, haversine distance, checkpoint area assignment
//! - [`models`] - Areas, locations, assignments, marshals, event roles
//! - [`names`] - Expansion of combined marshal-name CSV cells
//! - [`permissions`] - Contact visibility for admins, marshals and area leads
//! - [`checkin`] - GPS/manual/admin check-in validation
//! - [`records`] - Persisted row shapes and JSON column handling
//! - [`snapshot`] - An event's collections loaded for one request
//! - [`sanitize`] - Free-text cleanup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkin;
pub mod geo;
pub mod models;
pub mod names;
pub mod permissions;
pub mod records;
pub mod sanitize;
pub mod snapshot;
pub mod types;

pub use types::*;
