use super::*;

/// Expected: a non-admin only sees their own requests, whatever filter they pass
#[tokio::test]
async fn member_sees_only_own_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_team_member(db).await?;
    let bob = factory::create_team_member(db).await?;
    factory::create_leave_request(db, alice.id).await?;
    factory::leave_request::LeaveRequestFactory::new(db, bob.id)
        .dates(date(2024, 8, 5), date(2024, 8, 9))
        .build()
        .await?;

    let filter = LeaveFilter {
        team_member_id: Some(bob.id),
        ..Default::default()
    };
    let page = LeaveService::new(db)
        .get_paginated(&member(alice.clone()), filter, 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert!(page.items.iter().all(|r| r.team_member_id == alice.id));

    Ok(())
}

/// Expected: an admin sees everyone's requests
#[tokio::test]
async fn admin_sees_all_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;
    let alice = factory::create_team_member(db).await?;
    let bob = factory::create_team_member(db).await?;
    factory::create_leave_request(db, alice.id).await?;
    factory::create_leave_request(db, bob.id).await?;

    let page = LeaveService::new(db)
        .get_paginated(&member(admin), LeaveFilter::default(), 0, 10)
        .await?;

    assert_eq!(page.total, 2);

    Ok(())
}

/// Expected: Err(AuthError::AccessDenied) for someone else's request
#[tokio::test]
async fn denies_other_members_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_team_member(db).await?;
    let bob = factory::create_team_member(db).await?;
    let request = factory::create_leave_request(db, bob.id).await?;

    let result = LeaveService::new(db).get(&member(alice), request.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
