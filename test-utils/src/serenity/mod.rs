//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API or gateway would deliver, with sensible defaults for every field
//! the bot doesn't read.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Guild members with a role list
//! - `presence::create_test_presence` - Presence updates
//! - `presence::create_test_activity` - Activities inside a presence
//! - `role::create_test_role` - Roles with a permission bitset

pub mod member;
pub mod presence;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use presence::{create_test_activity, create_test_presence};
pub use role::create_test_role;
