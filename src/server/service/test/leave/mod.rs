use chrono::{NaiveDate, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::enums::LeaveStatus,
    server::{
        error::{auth::AuthError, AppError},
        model::{
            leave_request::{LeaveFilter, ReviewLeaveParams},
            team_member::TeamMember,
        },
        service::leave::LeaveService,
    },
};

mod cancel;
mod get;
mod review;

fn review(id: i32, reviewer_id: i32, status: LeaveStatus) -> ReviewLeaveParams {
    ReviewLeaveParams {
        id,
        reviewer_id,
        status,
        notes: None,
        reviewed_at: Utc::now(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn member(entity: entity::team_member::Model) -> TeamMember {
    TeamMember::from_entity(entity).unwrap()
}
