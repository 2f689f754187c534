use super::*;
use sea_orm::EntityTrait;

/// Expected: Ok, and only the new password verifies afterwards
#[tokio::test]
async fn stores_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .password_hash(hash_password("old-password").unwrap())
        .build()
        .await?;

    AuthService::new(db)
        .change_password(member.id, "old-password", "new-password")
        .await?;

    let stored = entity::prelude::TeamMember::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(verify_password(&stored.password_hash, "new-password"), Some(true));
    assert_eq!(verify_password(&stored.password_hash, "old-password"), Some(false));

    Ok(())
}

/// Expected: Err(AuthError::IncorrectCurrentPassword), stored hash unchanged
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .password_hash(hash_password("old-password").unwrap())
        .build()
        .await?;

    let result = AuthService::new(db)
        .change_password(member.id, "guessed-password", "new-password")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IncorrectCurrentPassword(id))) if id == member.id
    ));

    let stored = entity::prelude::TeamMember::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, member.password_hash);

    Ok(())
}

/// Expected: Err(AppError::BadRequest) before the current password is checked
#[tokio::test]
async fn rejects_short_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .password_hash(hash_password("old-password").unwrap())
        .build()
        .await?;

    let result = AuthService::new(db)
        .change_password(member.id, "old-password", "short")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
