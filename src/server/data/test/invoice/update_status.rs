use super::*;

#[tokio::test]
async fn records_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let paid_at = Utc::now();
    let change = InvoiceStatusChange::validate(
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        Some("wire".to_string()),
        paid_at,
    )
    .unwrap();

    let repo = InvoiceRepository::new(db);
    assert!(repo.update_status(invoice.id, change).await?);

    let updated = repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(updated.status, "paid");
    assert_eq!(updated.payment_method.as_deref(), Some("wire"));
    assert_eq!(
        updated.paid_at.map(|t| t.timestamp()),
        Some(paid_at.timestamp())
    );

    Ok(())
}

/// Expected: Ok(false) and no write when the invoice left the validated status
#[tokio::test]
async fn skips_invoice_whose_status_moved_on() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;
    let repo = InvoiceRepository::new(db);

    // Both changes are validated against `sent`; the payment lands first.
    let cancel = InvoiceStatusChange::validate(
        InvoiceStatus::Sent,
        InvoiceStatus::Cancelled,
        None,
        Utc::now(),
    )
    .unwrap();
    let pay = InvoiceStatusChange::validate(
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        Some("card".to_string()),
        Utc::now(),
    )
    .unwrap();

    assert!(repo.update_status(invoice.id, pay).await?);
    assert!(!repo.update_status(invoice.id, cancel).await?);

    let stored = repo.find_by_id(invoice.id).await?.unwrap();
    assert_eq!(stored.status, "paid");
    assert_eq!(stored.payment_method.as_deref(), Some("card"));

    Ok(())
}

#[tokio::test]
async fn returns_false_for_unknown_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let change = InvoiceStatusChange::validate(
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        None,
        Utc::now(),
    )
    .unwrap();

    assert!(!InvoiceRepository::new(db).update_status(77, change).await?);

    Ok(())
}
