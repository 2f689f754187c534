use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::enums::Role,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::team_member::{CreateTeamMemberParams, UpdateTeamMemberParams},
        service::{auth::AuthService, bootstrap::BootstrapCodeService},
        util::password::{hash_password, verify_password},
    },
};

mod bootstrap;
mod change_password;
mod login;

fn admin_params(email: &str) -> CreateTeamMemberParams {
    CreateTeamMemberParams {
        first_name: "Ada".to_string(),
        last_name: "Okafor".to_string(),
        email: email.to_string(),
        password_hash: hash_password("correct horse battery").unwrap(),
        role: Role::Admin,
        department: None,
        phone: None,
    }
}
