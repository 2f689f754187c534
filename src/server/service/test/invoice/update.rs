use super::*;

/// Expected: Err(AppError::BadRequest) once the invoice has been sent
#[tokio::test]
async fn refuses_to_edit_sent_invoice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, client.id, member.id)
        .status("sent")
        .build()
        .await?;

    let result = InvoiceService::new(db)
        .update(UpdateInvoiceParams {
            id: invoice.id,
            notes: Some("Late addition".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(AppError::BadRequest) when moving a draft to an unknown client
#[tokio::test]
async fn rejects_unknown_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_invoice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let client = factory::create_client(db).await?;
    let invoice = factory::create_invoice(db, client.id, member.id).await?;

    let result = InvoiceService::new(db)
        .update(UpdateInvoiceParams {
            id: invoice.id,
            client_id: Some(404),
            ..Default::default()
        })
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
        .update(UpdateInvoiceParams {
            id: 1,
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
