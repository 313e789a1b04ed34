pub mod cooldown;
pub mod discord;
pub mod mod_log;
pub mod moderation;
pub mod nickname;
pub mod permission;
pub mod rate_limit;
pub mod vanity;
