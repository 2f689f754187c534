use crate::{
    model::enums::Role,
    server::{
        data::{is_unique_violation, team_member::TeamMemberRepository},
        model::team_member::{CreateTeamMemberParams, UpdateTeamMemberParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod delete;
mod get_paginated;
mod update;

fn params(email: &str) -> CreateTeamMemberParams {
    CreateTeamMemberParams {
        first_name: "Ana".to_string(),
        last_name: "Ortiz".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Paralegal,
        department: Some("Litigation".to_string()),
        phone: None,
    }
}
