use super::*;

/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Expected: Err(AuthError::UserNotInDatabase) for a deleted member
#[tokio::test]
async fn fails_when_member_no_longer_exists() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_member_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Expected: Ok(TeamMember) for any logged-in member when no permission is required
#[tokio::test]
async fn returns_authenticated_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .role("assistant")
        .build()
        .await?;
    AuthSession::new(session).set_member_id(member.id).await?;

    let authenticated = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(authenticated.id, member.id);
    assert_eq!(authenticated.email, member.email);

    Ok(())
}

#[tokio::test]
async fn admin_permission_rejects_attorney() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let attorney = factory::create_team_member(db).await?;
    AuthSession::new(session).set_member_id(attorney.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == attorney.id
    ));

    Ok(())
}

/// Expected: admins and attorneys pass, paralegals and assistants are denied
#[tokio::test]
async fn billing_permission_allows_admin_and_attorney() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for (role, allowed) in [
        ("admin", true),
        ("attorney", true),
        ("paralegal", false),
        ("assistant", false),
    ] {
        let member = factory::team_member::TeamMemberFactory::new(db)
            .role(role)
            .build()
            .await?;
        AuthSession::new(session).set_member_id(member.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::Billing])
            .await;

        assert_eq!(result.is_ok(), allowed, "role {}", role);
    }

    Ok(())
}

/// Expected: every listed permission must hold
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let attorney = factory::create_team_member(db).await?;
    AuthSession::new(session).set_member_id(attorney.id).await?;
    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::Billing]).await.is_ok());
    assert!(guard
        .require(&[Permission::Billing, Permission::Admin])
        .await
        .is_err());

    let admin = factory::team_member::create_admin(db).await?;
    AuthSession::new(session).set_member_id(admin.id).await?;

    assert!(guard
        .require(&[Permission::Billing, Permission::Admin])
        .await
        .is_ok());

    Ok(())
}
