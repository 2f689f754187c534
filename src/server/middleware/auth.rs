//! Role checks for authenticated endpoints.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::team_member::TeamMemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::team_member::TeamMember,
};

use crate::model::enums::Role;

/// Access requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Only administrators.
    Admin,
    /// Administrators and attorneys; guards invoice management.
    Billing,
}

impl Permission {
    fn allows(self, role: Role) -> bool {
        match self {
            Permission::Admin => role == Role::Admin,
            Permission::Billing => matches!(role, Role::Admin | Role::Attorney),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Permission::Admin => "administrator role required",
            Permission::Billing => "administrator or attorney role required",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session's team member and checks every permission.
    ///
    /// An empty permission list only requires an authenticated member.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Authenticated member holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Member was deleted after login
    /// - `Err(AuthError::AccessDenied)` - First permission the member lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<TeamMember, AppError> {
        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(entity) = TeamMemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(member_id).into());
        };

        let member = TeamMember::from_entity(entity)?;

        if let Some(denied) = permissions.iter().find(|p| !p.allows(member.role)) {
            return Err(AuthError::AccessDenied(member_id, denied.describe().to_string()).into());
        }

        Ok(member)
    }
}
