use super::*;

/// Expected: draft numbered INV-YYYYMM-0001 with client and creator names
#[tokio::test]
async fn creates_numbered_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::team_member::TeamMemberFactory::new(db)
        .first_name("Amara")
        .last_name("Diallo")
        .build()
        .await?;
    let client = factory::client::ClientFactory::new(db)
        .company("Harbor Logistics")
        .build()
        .await?;

    let now = at(2024, 3, 11);
    let details = InvoiceService::new(db)
        .create(params(client.id, member.id, now), now)
        .await?;

    assert_eq!(details.invoice.invoice_number, "INV-202403-0001");
    assert_eq!(details.invoice.status, InvoiceStatus::Draft);
    assert_eq!(details.invoice.subtotal_cents, 60_000);
    assert_eq!(details.invoice.tax_cents, 9_600);
    assert_eq!(details.invoice.total_cents, 69_600);
    assert_eq!(details.invoice.client_name.as_deref(), Some("Harbor Logistics"));
    assert_eq!(details.invoice.creator_name.as_deref(), Some("Amara Diallo"));
    assert_eq!(details.items.len(), 1);

    Ok(())
}

/// Expected: Err(AppError::BadRequest) for an unknown client, next invoice still gets 0001
#[tokio::test]
async fn rejects_unknown_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let now = at(2024, 3, 11);
    let service = InvoiceService::new(db);

    let result = service.create(params(404, member.id, now), now).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let details = service.create(params(client.id, member.id, now), now).await?;
    assert_eq!(details.invoice.invoice_number, "INV-202403-0001");

    Ok(())
}
