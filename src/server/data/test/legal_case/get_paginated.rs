use super::*;

#[tokio::test]
async fn filters_cases() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client, case) = factory::helpers::create_case_with_dependencies(db).await?;
    let urgent = factory::legal_case::LegalCaseFactory::new(db)
        .priority("urgent")
        .status("pending")
        .build()
        .await?;

    let repo = LegalCaseRepository::new(db);

    let (all, total) = repo.get_paginated(&CaseFilter::default(), 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(all[0].id, urgent.id);

    let (by_client, _) = repo
        .get_paginated(
            &CaseFilter {
                client_id: Some(client.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0].id, case.id);

    let (by_assignee, _) = repo
        .get_paginated(
            &CaseFilter {
                assigned_to: Some(member.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_assignee.len(), 1);

    let (pending_urgent, total) = repo
        .get_paginated(
            &CaseFilter {
                status: Some(CaseStatus::Pending),
                priority: Some(Priority::Urgent),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(pending_urgent[0].id, urgent.id);

    Ok(())
}
