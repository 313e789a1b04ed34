//! Discord guild role domain model.

use serenity::all::{Permissions, Role};

/// Discord role within the tracked guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub role_id: u64,
    /// Role display name.
    pub name: String,
    /// Guild-level permissions granted by the role.
    pub permissions: Permissions,
}

impl GuildRole {
    /// Returns the `<@&id>` mention string for the role.
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.role_id)
    }
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            permissions: role.permissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_role;

    /// Tests converting a Serenity role into the domain model.
    ///
    /// Expected: Ok with ID, name and permission bits preserved
    #[test]
    fn converts_serenity_role() {
        let bits = (Permissions::SEND_MESSAGES | Permissions::ADD_REACTIONS).bits();
        let role = create_test_role(123, "Supporter", bits);

        let converted = GuildRole::from(&role);

        assert_eq!(converted.role_id, 123);
        assert_eq!(converted.name, "Supporter");
        assert_eq!(converted.permissions.bits(), bits);
        assert_eq!(converted.mention(), "<@&123>");
    }

    /// Tests converting a role payload that carries administrator rights.
    ///
    /// Expected: permission bits survive conversion, so the vanity safety check sees them
    #[test]
    fn keeps_dangerous_permission_bits() {
        let bits = (Permissions::SEND_MESSAGES | Permissions::ADMINISTRATOR).bits();
        let role = create_test_role(456, "Booster", bits);

        let converted = GuildRole::from(&role);

        assert!(converted.permissions.contains(Permissions::ADMINISTRATOR));
        assert!(!crate::service::vanity::role::is_role_safe(&converted));
    }
}
