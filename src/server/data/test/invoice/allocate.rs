use super::*;

/// Expected: invoice and items are stored under INV-202401-0001
#[tokio::test]
async fn creates_invoice_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let now = at(2024, 1, 15);

    let (invoice, items) = SequenceAllocator::invoices()
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();

    assert_eq!(invoice.invoice_number, "INV-202401-0001");
    assert_eq!(invoice.status, "draft");
    assert_eq!(invoice.subtotal_cents, 35_050);
    assert_eq!(invoice.tax_cents, 5_608);
    assert_eq!(invoice.total_cents, 40_658);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].amount_cents, 30_000);

    let stored = InvoiceRepository::new(db).find_items(invoice.id).await?;
    assert_eq!(stored, items);

    Ok(())
}

/// Expected: N creations in a month yield 0001..000N, the next month restarts
#[tokio::test]
async fn numbers_sequentially_per_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let allocator = SequenceAllocator::invoices();
    let mut numbers = Vec::new();

    for now in [at(2024, 1, 3), at(2024, 1, 9), at(2024, 1, 31), at(2024, 2, 1)] {
        let store = InvoiceSequenceStore::new(db, params(client.id, member.id, now));
        let (invoice, _) = allocator.allocate(&store, now).await.unwrap();
        numbers.push(invoice.invoice_number);
    }

    assert_eq!(
        numbers,
        vec![
            "INV-202401-0001",
            "INV-202401-0002",
            "INV-202401-0003",
            "INV-202402-0001"
        ]
    );

    Ok(())
}

/// Expected: an insert failing on the client reference leaves nothing and consumes no number
#[tokio::test]
async fn failed_insert_consumes_no_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let now = at(2024, 1, 15);
    let allocator = SequenceAllocator::invoices();

    let result = allocator
        .allocate(&InvoiceSequenceStore::new(db, params(404, member.id, now)), now)
        .await;

    assert!(matches!(result, Err(AllocationError::Store(_))));
    assert_eq!(invoice_count(db).await?, 0);

    let (invoice, _) = allocator
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();
    assert_eq!(invoice.invoice_number, "INV-202401-0001");

    Ok(())
}

/// Expected: a full month fails loudly instead of widening the number
#[tokio::test]
async fn exhausted_month_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .invoice_number("INV-202401-9999")
        .build()
        .await?;

    let now = at(2024, 1, 15);
    let result = SequenceAllocator::invoices()
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await;

    assert!(matches!(result, Err(AllocationError::SequenceExhausted { .. })));
    assert_eq!(invoice_count(db).await?, 1);

    Ok(())
}

/// Expected: created_at is the allocation time, so it falls in the numbered month
#[tokio::test]
async fn created_at_matches_numbered_month() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let last_second = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();

    let (invoice, _) = SequenceAllocator::invoices()
        .allocate(
            &InvoiceSequenceStore::new(db, params(client.id, member.id, last_second)),
            last_second,
        )
        .await
        .unwrap();

    assert_eq!(invoice.invoice_number, "INV-202401-0001");
    assert_eq!(invoice.created_at.timestamp(), last_second.timestamp());

    Ok(())
}
