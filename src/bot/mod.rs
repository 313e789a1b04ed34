//! Discord bot integration for moderation commands and vanity role upkeep.
//!
//! The bot connects to a single guild. Prefix commands arrive as messages, presence
//! updates drive incremental vanity reconciliation, and the first `ready` event kicks
//! off a one-time sweep over every member.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and role data in the cache
//! - `GUILD_MEMBERS` - Member listing for the startup sweep (privileged intent)
//! - `GUILD_MESSAGES` - Receive command messages
//! - `GUILD_PRESENCES` - Receive presence updates and cache presences (privileged intent)
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)
//!
//! Privileged intents must be explicitly enabled in the Discord Developer Portal for
//! the bot application.

pub mod command;
pub mod handler;
pub mod start;
