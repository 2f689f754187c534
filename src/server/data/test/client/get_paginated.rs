use super::*;

/// Expected: newest clients first, filters narrow both page and total
#[tokio::test]
async fn filters_and_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, assigned) = factory::helpers::create_client_with_member(db).await?;
    let inactive = factory::client::ClientFactory::new(db)
        .status("inactive")
        .build()
        .await?;
    let company = factory::client::ClientFactory::new(db)
        .company("Globex")
        .build()
        .await?;

    let repo = ClientRepository::new(db);

    let (all, total) = repo.get_paginated(&ClientFilter::default(), 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(all[0].id, company.id);

    let (active, total) = repo
        .get_paginated(
            &ClientFilter {
                status: Some(ClientStatus::Active),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert!(active.iter().all(|c| c.id != inactive.id));

    let (corporate, _) = repo
        .get_paginated(
            &ClientFilter {
                client_type: Some(ClientType::Corporate),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(corporate.len(), 1);
    assert_eq!(corporate[0].id, company.id);

    let (mine, _) = repo
        .get_paginated(
            &ClientFilter {
                assigned_to: Some(member.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, assigned.id);

    Ok(())
}
