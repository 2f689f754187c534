use super::*;

/// Expected: member and status filters, most recent start first
#[tokio::test]
async fn filters_by_member_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_team_member(db).await?;
    let bob = factory::create_team_member(db).await?;

    let early = factory::leave_request::LeaveRequestFactory::new(db, alice.id)
        .dates(date(2024, 1, 8), date(2024, 1, 9))
        .build()
        .await?;
    let late = factory::leave_request::LeaveRequestFactory::new(db, alice.id)
        .dates(date(2024, 6, 3), date(2024, 6, 7))
        .status("approved")
        .build()
        .await?;
    factory::create_leave_request(db, bob.id).await?;

    let repo = LeaveRequestRepository::new(db);

    let (all, total) = repo.get_paginated(&LeaveFilter::default(), 0, 10).await?;
    assert_eq!(total, 3);
    assert_eq!(all.len(), 3);

    let (mine, total) = repo
        .get_paginated(
            &LeaveFilter {
                team_member_id: Some(alice.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert_eq!(
        mine.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![late.id, early.id]
    );

    let (pending, total) = repo
        .get_paginated(
            &LeaveFilter {
                team_member_id: Some(alice.id),
                status: Some(LeaveStatus::Pending),
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(pending[0].id, early.id);

    Ok(())
}
