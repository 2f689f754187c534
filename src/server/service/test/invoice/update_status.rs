use super::*;

/// Expected: paid invoice records the payment method and time
#[tokio::test]
async fn records_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let now = at(2024, 4, 2);
    let details = InvoiceService::new(db)
        .update_status(invoice.id, InvoiceStatus::Paid, Some("check".to_string()), now)
        .await?
        .unwrap();

    assert_eq!(details.invoice.status, InvoiceStatus::Paid);
    assert_eq!(details.invoice.payment_method.as_deref(), Some("check"));
    assert_eq!(details.invoice.paid_at, Some(now));

    Ok(())
}

/// Expected: Err(AppError::BadRequest) without a payment method
#[tokio::test]
async fn requires_payment_method() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let result = InvoiceService::new(db)
        .update_status(invoice.id, InvoiceStatus::Paid, Some("  ".to_string()), Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(AppError::BadRequest) for any change to a paid invoice
#[tokio::test]
async fn paid_invoice_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("paid")
        .build()
        .await?;

    let result = InvoiceService::new(db)
        .update_status(invoice.id, InvoiceStatus::Overdue, None, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Ok(None) for a missing invoice
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InvoiceService::new(db)
        .update_status(7, InvoiceStatus::Sent, None, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
