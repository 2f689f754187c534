use super::*;

#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let updated = ClientRepository::new(db)
        .update(
            client.clone(),
            UpdateClientParams {
                id: client.id,
                status: Some(ClientStatus::Inactive),
                city: Some("Denver".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.status, "inactive");
    assert_eq!(updated.city.as_deref(), Some("Denver"));
    assert_eq!(updated.email, client.email);
    assert_eq!(updated.first_name, client.first_name);

    Ok(())
}
