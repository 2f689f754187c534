use super::*;

/// Expected: only the provided fields change
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;

    let updated = TeamMemberRepository::new(db)
        .update(UpdateTeamMemberParams {
            id: member.id,
            role: Some(Role::Admin),
            phone: Some("555-0100".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.role, "admin");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.email, member.email);
    assert_eq!(updated.password_hash, member.password_hash);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamMemberRepository::new(db)
        .update(UpdateTeamMemberParams {
            id: 42,
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

#[tokio::test]
async fn records_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let repo = TeamMemberRepository::new(db);
    let at = chrono::Utc::now();

    repo.set_last_login(member.id, at).await?;

    let stored = repo.find_by_id(member.id).await?.unwrap();
    assert_eq!(
        stored.last_login_at.map(|t| t.timestamp()),
        Some(at.timestamp())
    );

    Ok(())
}
