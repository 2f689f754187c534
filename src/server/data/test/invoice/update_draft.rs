use super::*;

/// Expected: items are replaced and totals follow them
#[tokio::test]
async fn replaces_items_and_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let now = at(2024, 1, 15);
    let (invoice, _) = SequenceAllocator::invoices()
        .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
        .await
        .unwrap();

    let lines = vec![line("Retainer", 1, 100_000)];
    let totals = InvoiceTotals::compute(&lines).unwrap();

    let (updated, items) = InvoiceRepository::new(db)
        .update_draft(UpdateInvoiceParams {
            id: invoice.id,
            lines: Some((lines, totals)),
            notes: Some("Revised".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].description, "Retainer");
    assert_eq!(updated.subtotal_cents, 100_000);
    assert_eq!(updated.tax_cents, 16_000);
    assert_eq!(updated.total_cents, 116_000);
    assert_eq!(updated.notes.as_deref(), Some("Revised"));
    assert_eq!(updated.invoice_number, invoice.invoice_number);

    Ok(())
}

/// Expected: Ok(None) once the invoice has been sent
#[tokio::test]
async fn ignores_non_draft_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let result = InvoiceRepository::new(db)
        .update_draft(UpdateInvoiceParams {
            id: invoice.id,
            notes: Some("Too late".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
