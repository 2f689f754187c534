use sea_orm::DatabaseConnection;

use crate::server::{
    data::team_member::TeamMemberRepository,
    error::AppError,
    model::{
        team_member::{TeamMember, UpdateTeamMemberParams},
        Page,
    },
    service::{foreign_key_as_bad_request, unique_as_bad_request},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Members ordered by last name, then first name.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Page<TeamMember>, AppError> {
        let (members, total) = TeamMemberRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let members = members
            .into_iter()
            .map(TeamMember::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(members, total, page, per_page))
    }

    pub async fn get(&self, id: i32) -> Result<Option<TeamMember>, AppError> {
        TeamMemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(TeamMember::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// # Returns
    /// - `Ok(Some(TeamMember))` - Updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(AppError::BadRequest)` - New email already in use
    pub async fn update(
        &self,
        params: UpdateTeamMemberParams,
    ) -> Result<Option<TeamMember>, AppError> {
        TeamMemberRepository::new(self.db)
            .update(params)
            .await
            .map_err(|e| unique_as_bad_request(e, "A team member with this email already exists"))?
            .map(TeamMember::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Deletes a member other than the acting one.
    ///
    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with that id
    /// - `Err(AppError::BadRequest)` - Self-deletion, or invoices still name the member as creator
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<bool, AppError> {
        if actor_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        TeamMemberRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| {
                foreign_key_as_bad_request(
                    e,
                    "Team member still has invoices and cannot be deleted",
                )
            })
    }
}
