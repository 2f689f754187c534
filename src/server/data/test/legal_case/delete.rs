use super::*;

/// Expected: documents are removed and tasks are detached
#[tokio::test]
async fn deletes_case_and_its_documents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, case) = factory::helpers::create_case_with_dependencies(db).await?;
    let document = factory::create_document(db, case.id, member.id).await?;
    let task = factory::task::TaskFactory::new(db, member.id)
        .case_id(case.id)
        .build()
        .await?;

    assert!(LegalCaseRepository::new(db).delete(case.id).await?);

    let documents = crate::server::data::document::DocumentRepository::new(db);
    assert!(documents.find_by_id(document.id).await?.is_none());

    let tasks = crate::server::data::task::TaskRepository::new(db);
    let task = tasks.find_by_id(task.id).await?.unwrap();
    assert_eq!(task.case_id, None);

    Ok(())
}
