use super::*;

#[tokio::test]
async fn filters_by_case_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, case) = factory::helpers::create_case_with_dependencies(db).await?;
    let other_case = factory::legal_case::LegalCaseFactory::new(db).build().await?;

    let evidence = factory::document::DocumentFactory::new(db, case.id, member.id)
        .category("evidence")
        .build()
        .await?;
    factory::create_document(db, case.id, member.id).await?;
    factory::create_document(db, other_case.id, member.id).await?;

    let repo = DocumentRepository::new(db);

    let (for_case, total) = repo
        .get_paginated(
            &DocumentFilter {
                case_id: Some(case.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 2);
    assert!(for_case.iter().all(|d| d.case_id == case.id));

    let (only_evidence, _) = repo
        .get_paginated(
            &DocumentFilter {
                category: Some(DocumentCategory::Evidence),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(only_evidence.len(), 1);
    assert_eq!(only_evidence[0].id, evidence.id);

    assert_eq!(repo.find_by_case(other_case.id).await?.len(), 1);

    Ok(())
}
