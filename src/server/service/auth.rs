//! Password login, registration, self-service account changes and
//! first-administrator bootstrap.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::team_member::TeamMemberRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        normalize_email,
        team_member::{CreateTeamMemberParams, TeamMember, UpdateTeamMemberParams},
    },
    service::{bootstrap::BootstrapCodeService, unique_as_bad_request},
    util::password::{hash_password, validate_password, verify_password},
};

const DUPLICATE_EMAIL: &str = "A team member with this email already exists";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and records the login time.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Arguments
    /// - `email` - Email as typed; normalized before lookup
    /// - `password` - Plain text password
    /// - `now` - Login time stored as `last_login_at`
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Authenticated member
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(InternalError::MalformedPasswordHash)` - Stored hash cannot be read
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<TeamMember, AppError> {
        let repo = TeamMemberRepository::new(self.db);

        let Some(email) = normalize_email(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let Some(mut entity) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        match verify_password(&entity.password_hash, password) {
            Some(true) => {}
            Some(false) => return Err(AuthError::InvalidCredentials.into()),
            None => {
                return Err(InternalError::MalformedPasswordHash {
                    member_id: entity.id,
                }
                .into())
            }
        }

        repo.set_last_login(entity.id, now).await?;
        entity.last_login_at = Some(now);

        tracing::info!("Team member {} logged in", entity.id);

        Ok(TeamMember::from_entity(entity)?)
    }

    /// Creates a team member.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Created member
    /// - `Err(AppError::BadRequest)` - Email already in use
    pub async fn register(&self, params: CreateTeamMemberParams) -> Result<TeamMember, AppError> {
        let entity = TeamMemberRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_as_bad_request(e, DUPLICATE_EMAIL))?;

        Ok(TeamMember::from_entity(entity)?)
    }

    /// Applies a member's changes to their own profile.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Updated member
    /// - `Err(AuthError::UserNotInDatabase)` - Member was deleted meanwhile
    pub async fn update_profile(
        &self,
        params: UpdateTeamMemberParams,
    ) -> Result<TeamMember, AppError> {
        let id = params.id;
        let Some(entity) = TeamMemberRepository::new(self.db).update(params).await? else {
            return Err(AuthError::UserNotInDatabase(id).into());
        };

        Ok(TeamMember::from_entity(entity)?)
    }

    /// Replaces a member's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - New password stored
    /// - `Err(AppError::BadRequest)` - New password fails validation
    /// - `Err(AuthError::IncorrectCurrentPassword)` - Current password does not match
    /// - `Err(AuthError::UserNotInDatabase)` - Member was deleted meanwhile
    /// - `Err(InternalError::MalformedPasswordHash)` - Stored hash cannot be read
    pub async fn change_password(
        &self,
        member_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        validate_password(new_password).map_err(AppError::BadRequest)?;

        let repo = TeamMemberRepository::new(self.db);

        let Some(entity) = repo.find_by_id(member_id).await? else {
            return Err(AuthError::UserNotInDatabase(member_id).into());
        };

        match verify_password(&entity.password_hash, current_password) {
            Some(true) => {}
            Some(false) => return Err(AuthError::IncorrectCurrentPassword(member_id).into()),
            None => return Err(InternalError::MalformedPasswordHash { member_id }.into()),
        }

        let password_hash =
            hash_password(new_password).map_err(|e| AppError::InternalError(e.to_string()))?;

        repo.update(UpdateTeamMemberParams {
            id: member_id,
            password_hash: Some(password_hash),
            ..Default::default()
        })
        .await?;

        tracing::info!("Team member {} changed their password", member_id);

        Ok(())
    }

    /// Creates the first administrator in exchange for a valid bootstrap code.
    ///
    /// The code is only consumed once the request has otherwise been accepted.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Created administrator
    /// - `Err(AuthError::AdminAlreadyExists)` - An administrator exists already
    /// - `Err(AuthError::InvalidBootstrapCode)` - Code missing, wrong or expired
    /// - `Err(AppError::BadRequest)` - Email already in use
    pub async fn bootstrap(
        &self,
        codes: &BootstrapCodeService,
        code: &str,
        params: CreateTeamMemberParams,
    ) -> Result<TeamMember, AppError> {
        if TeamMemberRepository::new(self.db).admin_exists().await? {
            return Err(AuthError::AdminAlreadyExists.into());
        }

        if !codes.validate_and_consume(code).await {
            return Err(AuthError::InvalidBootstrapCode.into());
        }

        let admin = self.register(params).await?;

        tracing::info!("Created initial administrator {}", admin.id);

        Ok(admin)
    }
}
