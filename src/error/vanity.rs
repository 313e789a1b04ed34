use serenity::all::Permissions;
use thiserror::Error;

/// Failures resolving the vanity role for a reconciliation.
///
/// These abort the current reconciliation without side effects. They are never raised
/// past the reconciliation boundary.
#[derive(Error, Debug, PartialEq)]
pub enum VanityError {
    /// Neither the configured role ID nor the configured role name matched a guild role.
    #[error("Vanity role not found (id: {id:?}, name: {name:?})")]
    RoleNotFound {
        /// Configured role ID, if any
        id: Option<u64>,
        /// Configured role name, if any
        name: Option<String>,
    },

    /// The resolved role carries a permission that must never be auto-assigned.
    ///
    /// Logged as a policy violation rather than a transient failure.
    #[error("Vanity role '{name}' ({role_id}) carries dangerous permissions: {permissions}")]
    UnsafeRole {
        /// Discord role ID
        role_id: u64,
        /// Role display name
        name: String,
        /// The offending subset of the role's permissions
        permissions: Permissions,
    },
}
