use super::*;

/// Expected: status, client and issue-date filters with the client joined
#[tokio::test]
async fn filters_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, client) = factory::helpers::create_client_with_member(db).await?;
    let other_client = factory::create_client(db).await?;
    let allocator = SequenceAllocator::invoices();

    for now in [at(2024, 1, 10), at(2024, 2, 10), at(2024, 3, 10)] {
        allocator
            .allocate(&InvoiceSequenceStore::new(db, params(client.id, member.id, now)), now)
            .await
            .unwrap();
    }
    factory::invoice::InvoiceFactory::new(db, other_client.id, member.id)
        .status("paid")
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);

    let (all, total) = repo.get_paginated(&InvoiceFilter::default(), 0, 10).await?;
    assert_eq!(total, 4);
    assert!(all.iter().all(|(_, client)| client.is_some()));

    let (for_client, total) = repo
        .get_paginated(
            &InvoiceFilter {
                client_id: Some(client.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 3);
    assert_eq!(for_client[0].0.invoice_number, "INV-202403-0001");
    assert_eq!(for_client[0].1.as_ref().map(|c| c.id), Some(client.id));

    let (paid, _) = repo
        .get_paginated(
            &InvoiceFilter {
                status: Some(InvoiceStatus::Paid),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0].0.client_id, other_client.id);

    let (february, total) = repo
        .get_paginated(
            &InvoiceFilter {
                start_date: Some(at(2024, 2, 1).date_naive()),
                end_date: Some(at(2024, 2, 10).date_naive()),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(february[0].0.invoice_number, "INV-202402-0001");

    Ok(())
}
