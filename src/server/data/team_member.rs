//! Team member repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::enums::Role,
    server::model::team_member::{CreateTeamMemberParams, UpdateTeamMemberParams},
};

pub struct TeamMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a team member.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created member
    /// - `Err(DbErr)` - Includes a unique violation when the email is taken
    pub async fn create(
        &self,
        params: CreateTeamMemberParams,
    ) -> Result<entity::team_member::Model, DbErr> {
        let now = Utc::now();

        entity::team_member::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            department: ActiveValue::Set(params.department),
            phone: ActiveValue::Set(params.phone),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Looks a member up by email; callers pass the normalized (lowercase) address.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Loads the members with the given ids, keyed by id. Used to label joined rows.
    pub async fn find_map(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::team_member::Model>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let members = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| (m.id, m)).collect())
    }

    /// Whether at least one administrator exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets members ordered by last then first name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Members per page
    ///
    /// # Returns
    /// - `Ok((members, total))` - Page of members and the total member count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::team_member::Model>, u64), DbErr> {
        let paginator = entity::prelude::TeamMember::find()
            .order_by_asc(entity::team_member::Column::LastName)
            .order_by_asc(entity::team_member::Column::FirstName)
            .order_by_asc(entity::team_member::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let members = paginator.fetch_page(page).await?;

        Ok((members, total))
    }

    /// Applies the provided fields.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Includes a unique violation when the new email is taken
    pub async fn update(
        &self,
        params: UpdateTeamMemberParams,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        let Some(member) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::team_member::ActiveModel = member.into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(department) = params.department {
            active.department = ActiveValue::Set(Some(department));
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(password_hash) = params.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Records a successful login.
    pub async fn set_last_login(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::TeamMember::update_many()
            .filter(entity::team_member::Column::Id.eq(id))
            .col_expr(
                entity::team_member::Column::LastLoginAt,
                sea_orm::sea_query::Expr::value(at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a member.
    ///
    /// # Returns
    /// - `Ok(true)` - Member deleted
    /// - `Ok(false)` - No member with that id
    /// - `Err(DbErr)` - Includes a foreign key violation when records still reference the member
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamMember::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
