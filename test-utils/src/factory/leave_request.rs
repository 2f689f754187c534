//! Leave request factory.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leave requests.
///
/// Defaults to a pending three day annual leave starting a week from today.
pub struct LeaveRequestFactory<'a> {
    db: &'a DatabaseConnection,
    team_member_id: i32,
    leave_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
}

impl<'a> LeaveRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_member_id: i32) -> Self {
        let today = Utc::now().date_naive();
        let start_date = today.checked_add_days(Days::new(7)).unwrap_or(today);
        let end_date = start_date.checked_add_days(Days::new(2)).unwrap_or(start_date);

        Self {
            db,
            team_member_id,
            leave_type: "annual".to_string(),
            start_date,
            end_date,
            status: "pending".to_string(),
        }
    }

    pub fn leave_type(mut self, leave_type: impl Into<String>) -> Self {
        self.leave_type = leave_type.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Inserts the leave request with an inclusive day count.
    pub async fn build(self) -> Result<entity::leave_request::Model, DbErr> {
        let now = Utc::now();
        let duration_days = (self.end_date - self.start_date).num_days() as i32 + 1;

        entity::leave_request::ActiveModel {
            team_member_id: ActiveValue::Set(self.team_member_id),
            leave_type: ActiveValue::Set(self.leave_type),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            duration_days: ActiveValue::Set(duration_days),
            reason: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending leave request for the given member.
pub async fn create_leave_request(
    db: &DatabaseConnection,
    team_member_id: i32,
) -> Result<entity::leave_request::Model, DbErr> {
    LeaveRequestFactory::new(db, team_member_id).build().await
}
