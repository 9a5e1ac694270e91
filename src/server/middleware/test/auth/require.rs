use super::*;

/// Tests resolving the user stored in the session.
///
/// Expected: Ok with the session user's id even when a default user is configured
#[tokio::test]
async fn prefers_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let session_user = factory::create_user(db).await?;
    let default_user = factory::create_user(db).await?;
    AuthSession::new(session)
        .set_user_id(session_user.id)
        .await?;

    let user_id = AuthGuard::new(db, session, Some(default_user.id))
        .require()
        .await?;

    assert_eq!(user_id, session_user.id);

    Ok(())
}

/// Tests falling back to the configured default user.
///
/// Expected: Ok with the default user's id
#[tokio::test]
async fn falls_back_to_default_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let user_id = AuthGuard::new(db, session, Some(user.id)).require().await?;

    assert_eq!(user_id, user.id);

    Ok(())
}

/// Tests a request with neither a session user nor a default user.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn fails_without_any_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session, None).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that does not exist.
///
/// Expected: Err(UserNotInDatabase) and the session user id cleared
#[tokio::test]
async fn clears_session_for_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(77).await?;

    let result = AuthGuard::new(db, session, None).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));
    assert!(auth_session.get_user_id().await?.is_none());

    Ok(())
}
