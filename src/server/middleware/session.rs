//! Typed wrapper around the authentication keys stored in the session.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_MEMBER_ID: &str = "auth:member";

/// Authentication state of the current session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated member, rotating the session id first.
    ///
    /// # Returns
    /// - `Ok(())` - Member stored
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn set_member_id(&self, member_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_MEMBER_ID, member_id)
            .await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(id))` - A member is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn get_member_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_MEMBER_ID).await?)
    }

    /// Removes all session data and deletes the session record.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
