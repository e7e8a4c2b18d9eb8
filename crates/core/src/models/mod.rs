//! Event domain types.
//!
//! These mirror the entities persisted by the storage layer, with list-valued
//! fields held as typed collections rather than the JSON text the table store
//! keeps. See [`crate::records`] for the persisted shapes.

pub mod area;
pub mod assignment;
pub mod location;
pub mod marshal;
pub mod role;

pub use area::Area;
pub use assignment::Assignment;
pub use location::Location;
pub use marshal::Marshal;
pub use role::EventRole;
