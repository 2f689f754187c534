use super::*;

/// Expected: CASE-202401-0001 through 0004 without gaps
#[tokio::test]
async fn allocates_sequential_case_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = at(2024, 1, 15);
    let allocator = SequenceAllocator::cases();
    let mut numbers = Vec::new();

    for i in 0..4 {
        let store = CaseSequenceStore::new(db, params(&format!("Matter {}", i), now));
        let case = allocator.allocate(&store, now).await.unwrap();
        numbers.push(case.case_number);
    }

    assert_eq!(
        numbers,
        vec![
            "CASE-202401-0001",
            "CASE-202401-0002",
            "CASE-202401-0003",
            "CASE-202401-0004"
        ]
    );

    Ok(())
}

/// Expected: a new month starts over at 0001 and earlier months are untouched
#[tokio::test]
async fn restarts_sequence_each_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::legal_case::LegalCaseFactory::new(db)
        .case_number("CASE-202312-0017")
        .build()
        .await?;

    let january = at(2024, 1, 2);
    let case = SequenceAllocator::cases()
        .allocate(&CaseSequenceStore::new(db, params("New year", january)), january)
        .await
        .unwrap();

    assert_eq!(case.case_number, "CASE-202401-0001");

    Ok(())
}

/// Expected: numbering continues from the stored maximum
#[tokio::test]
async fn continues_from_existing_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for number in ["CASE-202401-0007", "CASE-202401-0042", "CASE-202401-0003"] {
        factory::legal_case::LegalCaseFactory::new(db)
            .case_number(number)
            .build()
            .await?;
    }

    let now = at(2024, 1, 20);
    let case = SequenceAllocator::cases()
        .allocate(&CaseSequenceStore::new(db, params("Next", now)), now)
        .await
        .unwrap();

    assert_eq!(case.case_number, "CASE-202401-0043");

    Ok(())
}

/// Two creations that read the same maximum still end up with distinct numbers.
///
/// Expected: one writer gets 0001, the other retries and gets 0002
#[tokio::test]
async fn concurrent_creations_get_distinct_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = at(2024, 1, 15);
    let barrier = Arc::new(Barrier::new(2));
    let first = BarrierStore::new(
        CaseSequenceStore::new(db, params("First", now)),
        barrier.clone(),
    );
    let second = BarrierStore::new(CaseSequenceStore::new(db, params("Second", now)), barrier);

    let allocator = SequenceAllocator::cases();
    let (a, b) = tokio::join!(
        allocator.allocate(&first, now),
        allocator.allocate(&second, now)
    );

    let mut numbers = vec![a.unwrap().case_number, b.unwrap().case_number];
    numbers.sort();

    assert_eq!(numbers, vec!["CASE-202401-0001", "CASE-202401-0002"]);
    assert_eq!(LegalCaseRepository::new(db).count().await?, 2);

    Ok(())
}

/// Expected: a rejected insert leaves no case and does not consume the number
#[tokio::test]
async fn failed_insert_consumes_no_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = at(2024, 1, 15);
    let allocator = SequenceAllocator::cases();

    let mut orphan = params("Orphan", now);
    orphan.client_id = Some(9999);
    let result = allocator
        .allocate(&CaseSequenceStore::new(db, orphan), now)
        .await;
    assert!(result.is_err());
    assert_eq!(LegalCaseRepository::new(db).count().await?, 0);

    let case = allocator
        .allocate(&CaseSequenceStore::new(db, params("Valid", now)), now)
        .await
        .unwrap();
    assert_eq!(case.case_number, "CASE-202401-0001");

    Ok(())
}

/// Expected: a malformed maximum aborts allocation without inserting
#[tokio::test]
async fn malformed_maximum_aborts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::legal_case::LegalCaseFactory::new(db)
        .case_number("CASE-202401-00X9")
        .build()
        .await?;

    let now = at(2024, 1, 15);
    let result = SequenceAllocator::cases()
        .allocate(&CaseSequenceStore::new(db, params("Blocked", now)), now)
        .await;

    assert!(matches!(
        result,
        Err(crate::server::error::allocation::AllocationError::MalformedIdentifier { .. })
    ));
    assert_eq!(LegalCaseRepository::new(db).count().await?, 1);

    Ok(())
}

/// Expected: created_at is the allocation time, so it falls in the numbered month
#[tokio::test]
async fn created_at_matches_numbered_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last_second = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
    let case = SequenceAllocator::cases()
        .allocate(
            &CaseSequenceStore::new(db, params("Year-end filing", last_second)),
            last_second,
        )
        .await
        .unwrap();

    assert_eq!(case.case_number, "CASE-202401-0001");
    assert_eq!(case.created_at.timestamp(), last_second.timestamp());

    Ok(())
}
