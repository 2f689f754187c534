use super::*;

/// Expected: soonest due first, undated tasks last
#[tokio::test]
async fn orders_by_due_date_with_undated_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let now = Utc::now();

    let undated = factory::create_task(db, member.id).await?;
    let later = factory::task::TaskFactory::new(db, member.id)
        .due_date(now + Duration::days(5))
        .build()
        .await?;
    let sooner = factory::task::TaskFactory::new(db, member.id)
        .due_date(now + Duration::days(1))
        .build()
        .await?;

    let (tasks, total) = TaskRepository::new(db)
        .get_paginated(&TaskFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![sooner.id, later.id, undated.id]
    );

    Ok(())
}

#[tokio::test]
async fn filters_by_status_and_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_team_member(db).await?;
    let assignee = factory::create_team_member(db).await?;

    let assigned = factory::task::TaskFactory::new(db, creator.id)
        .assigned_to(assignee.id)
        .build()
        .await?;
    factory::task::TaskFactory::new(db, creator.id)
        .status("completed")
        .build()
        .await?;

    let repo = TaskRepository::new(db);

    let (mine, _) = repo
        .get_paginated(
            &TaskFilter {
                assigned_to: Some(assignee.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, assigned.id);

    let (completed, total) = repo
        .get_paginated(
            &TaskFilter {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert!(completed[0].completed_at.is_some());

    Ok(())
}
