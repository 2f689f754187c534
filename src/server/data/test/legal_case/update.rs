use super::*;

/// Expected: fields change, the case number does not
#[tokio::test]
async fn updates_case_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_case_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let case = factory::legal_case::LegalCaseFactory::new(db).build().await?;

    let updated = LegalCaseRepository::new(db)
        .update(UpdateCaseParams {
            id: case.id,
            status: Some(CaseStatus::Closed),
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, "closed");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.case_number, case.case_number);

    Ok(())
}
