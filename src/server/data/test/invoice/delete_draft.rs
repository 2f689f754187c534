use super::*;

/// Expected: the draft and its items are gone
#[tokio::test]
async fn deletes_draft_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let invoice = factory::create_invoice(db, client.id, member.id).await?;
    factory::invoice::create_item(db, invoice.id, 2, 1_000).await?;

    let repo = InvoiceRepository::new(db);

    assert!(repo.delete_draft(invoice.id).await?);
    assert!(repo.find_by_id(invoice.id).await?.is_none());
    assert!(repo.find_items(invoice.id).await?.is_empty());

    Ok(())
}

/// Expected: Ok(false) and the invoice remains when it is no longer a draft
#[tokio::test]
async fn keeps_issued_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);

    assert!(!repo.delete_draft(invoice.id).await?);
    assert!(repo.find_by_id(invoice.id).await?.is_some());

    Ok(())
}

/// Expected: deleting an earlier draft leaves a gap and numbering continues from the remaining maximum
#[tokio::test]
async fn next_number_follows_remaining_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let now = at(2024, 1, 15);
    let allocator = SequenceAllocator::invoices();

    let (first, _) = allocator
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();
    let (second, _) = allocator
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();

    let repo = InvoiceRepository::new(db);
    assert!(repo.delete_draft(first.id).await?);

    let (third, _) = allocator
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();

    assert_eq!(second.invoice_number, "INV-202401-0002");
    assert_eq!(third.invoice_number, "INV-202401-0003");

    Ok(())
}
