use super::*;

/// Expected: members sorted by last name with the total member count
#[tokio::test]
async fn returns_page_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for last_name in ["Young", "Adams", "Mills"] {
        factory::team_member::TeamMemberFactory::new(db)
            .last_name(last_name)
            .build()
            .await?;
    }

    let repo = TeamMemberRepository::new(db);
    let (first_page, total) = repo.get_paginated(0, 2).await?;
    let (second_page, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|m| m.last_name.as_str()).collect::<Vec<_>>(),
        vec!["Adams", "Mills"]
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].last_name, "Young");

    Ok(())
}

#[tokio::test]
async fn returns_empty_page_for_no_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (members, total) = TeamMemberRepository::new(db).get_paginated(0, 10).await?;

    assert!(members.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
