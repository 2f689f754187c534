//! Domain models for team members.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::Role,
        team::{
            BootstrapDto, PaginatedTeamMembersDto, RegisterDto, TeamMemberDto,
            UpdateProfileDto, UpdateTeamMemberDto,
        },
    },
    server::{
        error::internal::InternalError,
        model::{non_blank, normalize_email, optional_text, Page},
        util::password::{hash_password, validate_password},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Converts an entity model, parsing the stored role.
    ///
    /// # Returns
    /// - `Ok(TeamMember)` - Converted domain model
    /// - `Err(InternalError::UnknownVariant)` - Stored role is not recognised
    pub fn from_entity(entity: entity::team_member::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role: entity.role.parse()?,
            department: entity.department,
            phone: entity.phone,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            department: self.department,
            phone: self.phone,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
        }
    }
}

/// Full name for a joined team member row.
pub fn member_name(entity: &entity::team_member::Model) -> String {
    format!("{} {}", entity.first_name, entity.last_name)
}

/// Validated input for a new team member. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateTeamMemberParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub department: Option<String>,
    pub phone: Option<String>,
}

impl CreateTeamMemberParams {
    /// Validates a registration and hashes its password.
    ///
    /// # Returns
    /// - `Ok(CreateTeamMemberParams)` - Normalized parameters
    /// - `Err(String)` - Validation message for a 400 response
    pub fn from_dto(dto: RegisterDto) -> Result<Self, String> {
        Self::validated(
            &dto.first_name,
            &dto.last_name,
            &dto.email,
            &dto.password,
            dto.role,
            dto.department,
            dto.phone,
        )
    }

    /// Same as `from_dto` for the first administrator; the role is always `Admin`.
    pub fn admin_from_dto(dto: BootstrapDto) -> Result<Self, String> {
        Self::validated(
            &dto.first_name,
            &dto.last_name,
            &dto.email,
            &dto.password,
            Role::Admin,
            None,
            None,
        )
    }

    fn validated(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: Role,
        department: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, String> {
        let first_name = non_blank(first_name).ok_or("First name is required")?;
        let last_name = non_blank(last_name).ok_or("Last name is required")?;
        let email = normalize_email(email).ok_or("A valid email is required")?;
        validate_password(password)?;

        Ok(Self {
            first_name,
            last_name,
            email,
            password_hash: hash_password(password).map_err(|e| e.to_string())?,
            role,
            department: optional_text(department),
            phone: optional_text(phone),
        })
    }
}

/// Fields to change on a team member; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMemberParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
}

impl UpdateTeamMemberParams {
    pub fn from_dto(id: i32, dto: UpdateTeamMemberDto) -> Result<Self, String> {
        let first_name = match dto.first_name {
            Some(name) => Some(non_blank(&name).ok_or("First name cannot be empty")?),
            None => None,
        };
        let last_name = match dto.last_name {
            Some(name) => Some(non_blank(&name).ok_or("Last name cannot be empty")?),
            None => None,
        };
        let email = match dto.email {
            Some(email) => Some(normalize_email(&email).ok_or("A valid email is required")?),
            None => None,
        };
        let password_hash = match dto.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password).map_err(|e| e.to_string())?)
            }
            None => None,
        };

        Ok(Self {
            id,
            first_name,
            last_name,
            email,
            role: dto.role,
            department: dto.department,
            phone: dto.phone,
            password_hash,
        })
    }
}

impl UpdateTeamMemberParams {
    /// Self-service changes: names, department and phone only.
    pub fn from_profile_dto(id: i32, dto: UpdateProfileDto) -> Result<Self, String> {
        let first_name = match dto.first_name {
            Some(name) => Some(non_blank(&name).ok_or("First name cannot be empty")?),
            None => None,
        };
        let last_name = match dto.last_name {
            Some(name) => Some(non_blank(&name).ok_or("Last name cannot be empty")?),
            None => None,
        };

        Ok(Self {
            id,
            first_name,
            last_name,
            department: dto.department,
            phone: dto.phone,
            ..Default::default()
        })
    }
}

impl Page<TeamMember> {
    pub fn into_dto(self) -> PaginatedTeamMembersDto {
        PaginatedTeamMembersDto {
            members: self.items.into_iter().map(TeamMember::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
