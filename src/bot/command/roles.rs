//! `mod`, `staffs` and `vanity add|remove`: granting and revoking managed roles.

use crate::{config::Config, util::parse::parse_user_id};

use super::{failure_reply, mention, CommandContext};

const ROLE_FIX: &str = "1. Ensure the bot has **Manage Roles** permission\n2. The bot's role must be **higher** than the managed role in the role hierarchy";

/// A role that admin/staff members can grant and revoke by command.
pub struct ManagedRole {
    /// Command word, used in usage text.
    pub command: &'static str,
    /// Role label used in replies, e.g. "mod" in "Added @x to mod role."
    pub label: &'static str,
    pub log_added: &'static str,
    pub log_removed: &'static str,
    pub role_id: fn(&Config) -> Option<u64>,
}

pub const MOD_ROLE: ManagedRole = ManagedRole {
    command: "mod",
    label: "mod",
    log_added: "👤 **Mod Role Added**",
    log_removed: "👤 **Mod Role Removed**",
    role_id: |config| config.mod_role_id,
};

pub const STAFF_ROLE: ManagedRole = ManagedRole {
    command: "staffs",
    label: "staff",
    log_added: "👥 **Staff Role Added**",
    log_removed: "👥 **Staff Role Removed**",
    role_id: |config| config.staff_role_id,
};

pub const VANITY_ROLE: ManagedRole = ManagedRole {
    command: "vanity",
    label: "vanity",
    log_added: "⭐ **Vanity Role Added**",
    log_removed: "⭐ **Vanity Role Removed**",
    role_id: |config| config.vanity.role_id,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleAction {
    Add,
    Remove,
}

/// Handles `<command> add|remove <@user>` for a managed role. Admin/staff only.
pub async fn manage(cmd: &CommandContext<'_>, args: &[&str], role: &ManagedRole) {
    let usage = format!(
        "Usage: `{prefix}{name} add <@user>` or `{prefix}{name} remove <@user>`",
        prefix = cmd.prefix(),
        name = role.command
    );

    if args.len() < 2 {
        cmd.reply(usage).await;
        return;
    }

    if !cmd.authority.is_staff_or_above() {
        cmd.deny().await;
        return;
    }

    let Some(role_id) = (role.role_id)(&cmd.state.config) else {
        cmd.reply(format!("❌ {} role not configured.", capitalize(role.label)))
            .await;
        return;
    };

    let Some(target_id) = parse_user_id(args[1]) else {
        cmd.reply("❌ Invalid user mention.").await;
        return;
    };

    let action = match args[0].to_lowercase().as_str() {
        "add" => RoleAction::Add,
        "remove" => RoleAction::Remove,
        _ => {
            cmd.reply(usage).await;
            return;
        }
    };

    let service = cmd.moderation();
    let result = match action {
        RoleAction::Add => service.grant_role(target_id, role_id).await,
        RoleAction::Remove => service.revoke_role(target_id, role_id).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to manage {} role for {}: {}",
            role.label,
            target_id,
            e
        );
        cmd.reply(failure_reply(
            &e,
            &format!("manage the {} role", role.label),
            ROLE_FIX,
        ))
        .await;
        return;
    }

    let (reply, header) = match action {
        RoleAction::Add => (
            format!("✅ Added {} to {} role.", mention(target_id), role.label),
            role.log_added,
        ),
        RoleAction::Remove => (
            format!("✅ Removed {} from {} role.", mention(target_id), role.label),
            role.log_removed,
        ),
    };

    cmd.reply(reply).await;
    cmd.log_action(header, target_id, None).await;
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
