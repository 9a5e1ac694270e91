use super::*;

/// Tests fetching a user with no favorites.
///
/// Expected: Ok(Some) with an empty favorites list
#[tokio::test]
async fn returns_user_without_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let user = UserService::new(db).get_user(created.id).await?;

    assert!(user.is_some());
    assert!(user.unwrap().favorites.is_empty());

    Ok(())
}

/// Tests fetching an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db).get_user(1).await?;

    assert!(user.is_none());

    Ok(())
}
