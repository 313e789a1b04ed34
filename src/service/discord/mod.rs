//! Platform capabilities consumed by the vanity engine.
//!
//! `DiscordGateway` describes the small slice of Discord the reconciliation engine
//! needs: role and member lookup, cached presence, role mutation, and messaging. The
//! production implementation wraps Serenity's HTTP client and cache; tests use an
//! in-memory recording gateway.

pub mod gateway;
#[cfg(test)]
pub mod recording;

pub use gateway::{DiscordGateway, SerenityGateway};
