use chrono::{Duration, Utc};
use crate::{
    model::enums::TaskStatus,
    server::{
        data::task::TaskRepository,
        model::task::{TaskFilter, UpdateTaskParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod stats;
