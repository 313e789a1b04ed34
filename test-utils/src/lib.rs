//! Guildwarden Test Utils
//!
//! Shared testing utilities for the bot. Tests that convert Serenity models into the
//! bot's domain types need real Serenity structs, which have no public constructors;
//! the factories in [`serenity`] build them by deserializing JSON shaped like Discord's
//! API responses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn test_member_conversion() {
//!     let member = create_test_member(42, 1000, "someone", &[10, 20]);
//!     let role = create_test_role(10, "Supporter", 0);
//!
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
