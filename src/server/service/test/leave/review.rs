use super::*;

/// Expected: request approved with the reviewer recorded
#[tokio::test]
async fn approves_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;
    let alice = factory::create_team_member(db).await?;
    let request = factory::create_leave_request(db, alice.id).await?;

    let reviewed = LeaveService::new(db)
        .review(review(request.id, admin.id, LeaveStatus::Approved))
        .await?
        .unwrap();

    assert_eq!(reviewed.status, LeaveStatus::Approved);
    assert_eq!(reviewed.reviewed_by, Some(admin.id));
    assert!(reviewed.reviewed_at.is_some());

    Ok(())
}

/// Expected: Err(AppError::BadRequest) for a request already decided
#[tokio::test]
async fn rejects_review_of_decided_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;
    let alice = factory::create_team_member(db).await?;
    let request = factory::leave_request::LeaveRequestFactory::new(db, alice.id)
        .status("rejected")
        .build()
        .await?;

    let result = LeaveService::new(db)
        .review(review(request.id, admin.id, LeaveStatus::Approved))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Ok(None) for a missing request
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;

    let result = LeaveService::new(db)
        .review(review(99, admin.id, LeaveStatus::Rejected))
        .await?;

    assert!(result.is_none());

    Ok(())
}
