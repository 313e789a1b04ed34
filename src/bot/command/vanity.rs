use serenity::all::UserId;

use crate::{
    model::member::GuildMember,
    service::{
        discord::{DiscordGateway, SerenityGateway},
        vanity::{
            status::{extract_custom_status, has_vanity},
            VanityService,
        },
    },
    util::parse::parse_user_id,
};

use super::{mention, roles, CommandContext};

/// `vanity add|remove|check <@user>`.
pub async fn vanity(cmd: &CommandContext<'_>, args: &[&str]) {
    let is_check = args
        .first()
        .is_some_and(|action| action.eq_ignore_ascii_case("check"));

    if is_check {
        check(cmd, args).await;
    } else if args.is_empty() {
        let prefix = cmd.prefix();
        cmd.reply(format!(
            "Usage: `{prefix}vanity add <@user>` or `{prefix}vanity remove <@user>` or `{prefix}vanity check <@user>`"
        ))
        .await;
    } else {
        roles::manage(cmd, args, &roles::VANITY_ROLE).await;
    }
}

/// Reports how the vanity predicate evaluates for a member right now.
async fn check(cmd: &CommandContext<'_>, args: &[&str]) {
    let Some(target) = args.get(1) else {
        cmd.reply(format!("Usage: `{}vanity check <@user>`", cmd.prefix()))
            .await;
        return;
    };

    if !cmd.authority.is_staff_or_above() {
        cmd.deny().await;
        return;
    }

    let Some(target_id) = parse_user_id(target) else {
        cmd.reply("❌ Invalid user mention.").await;
        return;
    };

    let config = &cmd.state.config;
    let member = match cmd
        .ctx
        .http
        .get_member(config.guild_id.into(), UserId::new(target_id))
        .await
    {
        Ok(member) => GuildMember::from(&member),
        Err(e) => {
            cmd.reply(format!("❌ Error getting member: {}", e)).await;
            return;
        }
    };

    let gateway = SerenityGateway::new(cmd.ctx.http.clone(), cmd.ctx.cache.clone());
    let presence = gateway.cached_presence(config.guild_id, target_id);
    let status = extract_custom_status(presence.as_ref());

    let role_id = match VanityService::new(&gateway, &config.vanity, config.guild_id, None)
        .resolve_role()
        .await
    {
        Ok(role) => Some(role.role_id),
        Err(e) => {
            tracing::debug!("Vanity check: role unresolved, using configured ID: {}", e);
            config.vanity.role_id
        }
    };

    let report = VanityCheck {
        user_id: member.user_id,
        has_vanity: has_vanity(&status, &config.vanity.search),
        has_role: role_id.is_some_and(|id| member.has_role(id)),
        status,
        search: config.vanity.search.clone(),
    };

    cmd.reply(report.to_string()).await;
}

struct VanityCheck {
    user_id: u64,
    status: String,
    search: String,
    has_vanity: bool,
    has_role: bool,
}

impl std::fmt::Display for VanityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "**Vanity Check for {}:**", mention(self.user_id))?;
        writeln!(f, "Status: `{}`", self.status)?;
        writeln!(f, "Looking for: `{}`", self.search)?;
        writeln!(f, "Has vanity string: `{}`", self.has_vanity)?;
        write!(f, "Has role: `{}`", self.has_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the check report layout.
    ///
    /// Expected: one line per field, mention in the header
    #[test]
    fn formats_check_report() {
        let report = VanityCheck {
            user_id: 42,
            status: "join /example".to_string(),
            search: "/example".to_string(),
            has_vanity: true,
            has_role: false,
        };

        assert_eq!(
            report.to_string(),
            "**Vanity Check for <@42>:**\nStatus: `join /example`\nLooking for: `/example`\nHas vanity string: `true`\nHas role: `false`"
        );
    }
}
