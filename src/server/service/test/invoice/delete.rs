use super::*;

/// Expected: Ok(true) for a draft, then Ok(false)
#[tokio::test]
async fn deletes_draft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::create_invoice(db, client.id, member.id).await?;

    let service = InvoiceService::new(db);

    assert!(service.delete(invoice.id).await?);
    assert!(!service.delete(invoice.id).await?);

    Ok(())
}

/// Expected: Err(AppError::BadRequest) and the sent invoice is kept
#[tokio::test]
async fn refuses_to_delete_sent_invoice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let service = InvoiceService::new(db);

    assert!(matches!(
        service.delete(invoice.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(service.get(invoice.id).await?.is_some());

    Ok(())
}
