use super::*;

#[tokio::test]
async fn deletes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let repo = TeamMemberRepository::new(db);

    assert!(repo.delete(member.id).await?);
    assert!(repo.find_by_id(member.id).await?.is_none());
    assert!(!repo.delete(member.id).await?);

    Ok(())
}
