use super::*;

/// Expected: each update bumps the version
#[tokio::test]
async fn increments_version_on_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, case) = factory::helpers::create_case_with_dependencies(db).await?;
    let document = factory::create_document(db, case.id, member.id).await?;
    let repo = DocumentRepository::new(db);

    let first = repo
        .update(UpdateDocumentParams {
            id: document.id,
            status: Some(DocumentStatus::Final),
            ..Default::default()
        })
        .await?
        .unwrap();
    let second = repo
        .update(UpdateDocumentParams {
            id: document.id,
            title: Some("Final brief".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(first.version, 2);
    assert_eq!(first.status, "final");
    assert_eq!(second.version, 3);
    assert_eq!(second.title, "Final brief");

    Ok(())
}

/// Expected: an empty update leaves the version alone
#[tokio::test]
async fn empty_update_keeps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, case) = factory::helpers::create_case_with_dependencies(db).await?;
    let document = factory::create_document(db, case.id, member.id).await?;

    let unchanged = DocumentRepository::new(db)
        .update(UpdateDocumentParams {
            id: document.id,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(unchanged.version, 1);

    Ok(())
}
