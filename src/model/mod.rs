//! Domain models used by the service layer.
//!
//! Serenity types are converted into these small models at the gateway boundary so the
//! reconciliation engine and the permission logic can be exercised without a live
//! Discord connection.

pub mod member;
pub mod permission;
pub mod presence;
pub mod role;
pub mod vanity;
