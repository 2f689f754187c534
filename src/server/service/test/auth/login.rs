use super::*;
use sea_orm::EntityTrait;

/// Expected: Ok with last_login_at recorded
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .email("grace@firm.test")
        .password_hash(hash_password("s3cret-pass").unwrap())
        .build()
        .await?;
    let now = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();

    let logged_in = AuthService::new(db)
        .login("  Grace@Firm.test ", "s3cret-pass", now)
        .await?;

    assert_eq!(logged_in.id, member.id);
    assert_eq!(logged_in.last_login_at, Some(now));

    let stored = entity::prelude::TeamMember::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_login_at, Some(now));

    Ok(())
}

/// Expected: Err(AuthError::InvalidCredentials) for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team_member::TeamMemberFactory::new(db)
        .email("grace@firm.test")
        .password_hash(hash_password("s3cret-pass").unwrap())
        .build()
        .await?;

    let result = AuthService::new(db)
        .login("grace@firm.test", "not-the-pass", Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: Err(AuthError::InvalidCredentials) for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login("nobody@firm.test", "whatever-pass", Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: Err(InternalError::MalformedPasswordHash) when the stored hash is unreadable
#[tokio::test]
async fn reports_malformed_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .email("legacy@firm.test")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login("legacy@firm.test", "any-password", Utc::now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::MalformedPasswordHash { member_id }))
            if member_id == member.id
    ));

    Ok(())
}
