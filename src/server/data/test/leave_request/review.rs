use super::*;

fn review(id: i32, reviewer_id: i32, status: LeaveStatus) -> ReviewLeaveParams {
    ReviewLeaveParams {
        id,
        reviewer_id,
        status,
        notes: Some("Enjoy".to_string()),
        reviewed_at: Utc::now(),
    }
}

/// Expected: decision, reviewer and notes are recorded
#[tokio::test]
async fn approves_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let admin = factory::team_member::create_admin(db).await?;
    let request = factory::create_leave_request(db, member.id).await?;

    let repo = LeaveRequestRepository::new(db);
    assert!(repo.review(review(request.id, admin.id, LeaveStatus::Approved)).await?);

    let reviewed = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(reviewed.status, "approved");
    assert_eq!(reviewed.reviewed_by, Some(admin.id));
    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(reviewed.review_notes.as_deref(), Some("Enjoy"));

    Ok(())
}

/// Expected: Ok(false) and no change once a request has been decided
#[tokio::test]
async fn ignores_decided_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_team_member(db).await?;
    let admin = factory::team_member::create_admin(db).await?;
    let request = factory::leave_request::LeaveRequestFactory::new(db, member.id)
        .status("rejected")
        .build()
        .await?;

    let repo = LeaveRequestRepository::new(db);
    assert!(!repo.review(review(request.id, admin.id, LeaveStatus::Approved)).await?);

    let unchanged = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(unchanged.status, "rejected");
    assert!(unchanged.reviewed_by.is_none());

    Ok(())
}

/// Expected: Ok(false) for an unknown id
#[tokio::test]
async fn returns_false_for_unknown_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;

    let reviewed = LeaveRequestRepository::new(db)
        .review(review(42, admin.id, LeaveStatus::Rejected))
        .await?;

    assert!(!reviewed);

    Ok(())
}
