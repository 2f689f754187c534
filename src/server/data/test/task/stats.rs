use super::*;

/// Expected: only open tasks past their due date count as overdue
#[tokio::test]
async fn counts_overdue_open_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    for status in ["pending", "in_progress", "completed", "cancelled"] {
        factory::task::TaskFactory::new(db, member.id)
            .status(status)
            .due_date(yesterday)
            .build()
            .await?;
    }
    factory::task::TaskFactory::new(db, member.id)
        .due_date(now + Duration::days(1))
        .build()
        .await?;
    factory::create_task(db, member.id).await?;

    let repo = TaskRepository::new(db);
    let mut by_status = repo.count_by_status().await?;
    by_status.sort();

    assert_eq!(repo.count().await?, 6);
    assert_eq!(repo.count_overdue(now).await?, 2);
    assert_eq!(
        by_status,
        vec![
            ("cancelled".to_string(), 1),
            ("completed".to_string(), 1),
            ("in_progress".to_string(), 1),
            ("pending".to_string(), 3),
        ]
    );

    Ok(())
}
