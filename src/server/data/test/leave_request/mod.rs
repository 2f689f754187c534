use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::enums::{LeaveStatus, LeaveType},
    server::{
        data::leave_request::LeaveRequestRepository,
        model::leave_request::{CreateLeaveRequestParams, LeaveFilter, ReviewLeaveParams},
    },
};

mod get_paginated;
mod review;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
