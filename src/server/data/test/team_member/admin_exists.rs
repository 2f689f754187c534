use super::*;

#[tokio::test]
async fn returns_false_without_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_team_member(db).await?;

    assert!(!TeamMemberRepository::new(db).admin_exists().await?);

    Ok(())
}

#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team_member::create_admin(db).await?;

    assert!(TeamMemberRepository::new(db).admin_exists().await?);

    Ok(())
}
