use super::*;

/// Expected: Ok with version 1
#[tokio::test]
async fn creates_document_at_version_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, case) = factory::helpers::create_case_with_dependencies(db).await?;

    let document = DocumentRepository::new(db)
        .create(CreateDocumentParams {
            case_id: case.id,
            uploaded_by: member.id,
            title: "Motion to dismiss".to_string(),
            description: None,
            file_path: "/cases/motion.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size: 48_213,
            category: DocumentCategory::Motion,
            status: DocumentStatus::Draft,
        })
        .await?;

    assert_eq!(document.version, 1);
    assert_eq!(document.category, "motion");
    assert_eq!(document.file_size, 48_213);

    Ok(())
}

/// Expected: Err when the case does not exist
#[tokio::test]
async fn rejects_unknown_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;

    let result = DocumentRepository::new(db)
        .create(CreateDocumentParams {
            case_id: 77,
            uploaded_by: member.id,
            title: "Brief".to_string(),
            description: None,
            file_path: "/brief.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size: 10,
            category: DocumentCategory::Brief,
            status: DocumentStatus::Final,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
