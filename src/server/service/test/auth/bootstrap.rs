use super::*;

/// Expected: Ok with an admin created and the code consumed
#[tokio::test]
async fn creates_first_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = BootstrapCodeService::new();
    let code = codes.generate().await;

    let admin = AuthService::new(db)
        .bootstrap(&codes, &code, admin_params("ada@firm.test"))
        .await?;

    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.email, "ada@firm.test");
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Expected: Err(AuthError::InvalidBootstrapCode) and the stored code survives
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = BootstrapCodeService::new();
    codes.generate().await;

    let result = AuthService::new(db)
        .bootstrap(&codes, "guess", admin_params("ada@firm.test"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidBootstrapCode))
    ));
    assert!(codes.has_valid_code().await);

    Ok(())
}

/// Expected: Err(AuthError::AdminAlreadyExists) without consuming the code
#[tokio::test]
async fn refuses_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team_member::create_admin(db).await?;

    let codes = BootstrapCodeService::new();
    let code = codes.generate().await;

    let result = AuthService::new(db)
        .bootstrap(&codes, &code, admin_params("ada@firm.test"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminAlreadyExists))
    ));
    assert!(codes.has_valid_code().await);

    Ok(())
}

/// Expected: Err(AppError::BadRequest) when registering an email twice
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(admin_params("ada@firm.test")).await?;

    let result = service.register(admin_params("ada@firm.test")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
