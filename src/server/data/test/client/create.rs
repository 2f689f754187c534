use super::*;

#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo.create(corporate("ap@northwind.test")).await?;

    assert_eq!(client.client_type, "corporate");
    assert_eq!(client.status, "pending");
    assert_eq!(client.company_name.as_deref(), Some("Northwind Traders"));
    assert!(repo.exists(client.id).await?);

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    repo.create(corporate("ap@northwind.test")).await?;

    let result = repo.create(corporate("ap@northwind.test")).await;

    assert!(result.as_ref().is_err_and(is_unique_violation));

    Ok(())
}

/// Expected: Err for an assignee that does not exist
#[tokio::test]
async fn rejects_unknown_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = corporate("ap@northwind.test");
    params.assigned_to = Some(404);

    let result = ClientRepository::new(db).create(params).await;

    assert!(result.is_err());

    Ok(())
}
