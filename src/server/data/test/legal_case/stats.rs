use super::*;

#[tokio::test]
async fn counts_by_status_and_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (status, priority) in [
        ("active", "high"),
        ("active", "low"),
        ("closed", "high"),
    ] {
        factory::legal_case::LegalCaseFactory::new(db)
            .status(status)
            .priority(priority)
            .build()
            .await?;
    }

    let repo = LegalCaseRepository::new(db);
    let mut by_status = repo.count_by_status().await?;
    let mut by_priority = repo.count_by_priority().await?;
    by_status.sort();
    by_priority.sort();

    assert_eq!(repo.count().await?, 3);
    assert_eq!(
        by_status,
        vec![("active".to_string(), 2), ("closed".to_string(), 1)]
    );
    assert_eq!(
        by_priority,
        vec![("high".to_string(), 2), ("low".to_string(), 1)]
    );

    Ok(())
}
