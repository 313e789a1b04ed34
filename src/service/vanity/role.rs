//! Vanity role lookup and the dangerous-permission safety check.

use serenity::all::Permissions;

use crate::{error::vanity::VanityError, model::role::GuildRole};

/// Permissions that must never be handed out by status-based auto-assignment.
pub fn dangerous_permissions() -> Permissions {
    Permissions::ADMINISTRATOR
        | Permissions::MANAGE_GUILD
        | Permissions::MANAGE_ROLES
        | Permissions::BAN_MEMBERS
        | Permissions::KICK_MEMBERS
        | Permissions::MANAGE_CHANNELS
        | Permissions::MANAGE_WEBHOOKS
        | Permissions::MENTION_EVERYONE
}

pub fn is_role_safe(role: &GuildRole) -> bool {
    !role.permissions.intersects(dangerous_permissions())
}

/// Rejects roles carrying any dangerous permission.
///
/// # Returns
/// - `Ok(())` - The role grants nothing from the dangerous set
/// - `Err(VanityError::UnsafeRole)` - With the offending permissions
pub fn ensure_role_safe(role: &GuildRole) -> Result<(), VanityError> {
    if is_role_safe(role) {
        return Ok(());
    }

    Err(VanityError::UnsafeRole {
        role_id: role.role_id,
        name: role.name.clone(),
        permissions: role.permissions & dangerous_permissions(),
    })
}

/// Finds the vanity role among the guild's roles.
///
/// Matches by ID first. Falls back to an exact, case-sensitive name match when the ID
/// is unset or no longer exists.
pub fn find_vanity_role<'r>(
    roles: &'r [GuildRole],
    role_id: Option<u64>,
    role_name: Option<&str>,
) -> Result<&'r GuildRole, VanityError> {
    let by_id = role_id.and_then(|id| roles.iter().find(|role| role.role_id == id));

    by_id
        .or_else(|| role_name.and_then(|name| roles.iter().find(|role| role.name == name)))
        .ok_or_else(|| VanityError::RoleNotFound {
            id: role_id,
            name: role_name.map(str::to_string),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(role_id: u64, name: &str, permissions: Permissions) -> GuildRole {
        GuildRole {
            role_id,
            name: name.to_string(),
            permissions,
        }
    }

    /// Tests that the administrator bit fails the safety check.
    ///
    /// Expected: unsafe, error lists only the dangerous bit
    #[test]
    fn administrator_is_unsafe() {
        let role = role(1, "Supporter", Permissions::ADMINISTRATOR | Permissions::SEND_MESSAGES);

        assert!(!is_role_safe(&role));
        assert_eq!(
            ensure_role_safe(&role),
            Err(VanityError::UnsafeRole {
                role_id: 1,
                name: "Supporter".to_string(),
                permissions: Permissions::ADMINISTRATOR,
            })
        );
    }

    /// Tests that messaging-only permissions pass the safety check.
    ///
    /// Expected: safe
    #[test]
    fn messaging_permissions_are_safe() {
        let role = role(
            1,
            "Supporter",
            Permissions::SEND_MESSAGES
                | Permissions::READ_MESSAGE_HISTORY
                | Permissions::ADD_REACTIONS
                | Permissions::EMBED_LINKS,
        );

        assert!(is_role_safe(&role));
        assert_eq!(ensure_role_safe(&role), Ok(()));
    }

    /// Tests every dangerous permission individually.
    ///
    /// Expected: each one alone makes the role unsafe
    #[test]
    fn every_dangerous_bit_is_rejected() {
        for permission in dangerous_permissions().iter() {
            assert!(!is_role_safe(&role(1, "Supporter", permission)));
        }
    }

    /// Tests that lookup by ID wins over a matching name.
    ///
    /// Expected: the role with the configured ID
    #[test]
    fn prefers_id_over_name() {
        let roles = vec![
            role(1, "Supporter", Permissions::empty()),
            role(2, "Vanity", Permissions::empty()),
        ];

        let found = find_vanity_role(&roles, Some(2), Some("Supporter")).unwrap();

        assert_eq!(found.role_id, 2);
    }

    /// Tests falling back to the name when the ID no longer exists.
    ///
    /// Expected: the role with the exact name
    #[test]
    fn falls_back_to_exact_name() {
        let roles = vec![
            role(1, "supporter", Permissions::empty()),
            role(2, "Supporter", Permissions::empty()),
        ];

        let found = find_vanity_role(&roles, Some(99), Some("Supporter")).unwrap();

        assert_eq!(found.role_id, 2);
    }

    /// Tests that nothing resolves when neither ID nor name match.
    ///
    /// Expected: Err(RoleNotFound) echoing the configured values
    #[test]
    fn reports_missing_role() {
        let roles = vec![role(1, "Supporter", Permissions::empty())];

        assert_eq!(
            find_vanity_role(&roles, None, Some("Vanity")),
            Err(VanityError::RoleNotFound {
                id: None,
                name: Some("Vanity".to_string()),
            })
        );
    }
}
