use super::*;

/// Expected: own pending request becomes cancelled
#[tokio::test]
async fn cancels_own_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_team_member(db).await?;
    let request = factory::create_leave_request(db, alice.id).await?;

    let cancelled = LeaveService::new(db)
        .cancel(&member(alice), request.id)
        .await?
        .unwrap();

    assert_eq!(cancelled.status, LeaveStatus::Cancelled);

    Ok(())
}

/// Expected: Err(AuthError::AccessDenied) even for an administrator
#[tokio::test]
async fn cannot_cancel_someone_elses_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::team_member::create_admin(db).await?;
    let alice = factory::create_team_member(db).await?;
    let request = factory::create_leave_request(db, alice.id).await?;

    let result = LeaveService::new(db).cancel(&member(admin), request.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Err(AppError::BadRequest) once the request was approved
#[tokio::test]
async fn cannot_cancel_approved_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_leave_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_team_member(db).await?;
    let request = factory::leave_request::LeaveRequestFactory::new(db, alice.id)
        .status("approved")
        .build()
        .await?;

    let result = LeaveService::new(db).cancel(&member(alice), request.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
