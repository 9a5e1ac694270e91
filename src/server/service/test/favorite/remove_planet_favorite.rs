use super::*;

/// Tests removing a planet favorite that was just added.
///
/// Expected: Ok, and the user is left with zero favorites
#[tokio::test]
async fn removes_added_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let service = FavoriteService::new(db);

    service.add_planet_favorite(user.id, planet.id).await?;
    service.remove_planet_favorite(user.id, planet.id).await?;

    assert!(service.list_favorites(user.id).await?.is_empty());

    Ok(())
}

/// Tests removing a planet favorite the user never added.
///
/// Expected: Err(NotFound) naming the planet target
#[tokio::test]
async fn fails_when_not_favorited() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let result = FavoriteService::new(db)
        .remove_planet_favorite(user.id, planet.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::NotFound { user_id, target }))
            if user_id == user.id && target == FavoriteTarget::Planet(planet.id)
    ));

    Ok(())
}

/// Tests removing the same favorite twice.
///
/// Expected: Ok the first time, Err(NotFound) the second
#[tokio::test]
async fn second_removal_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;
    let service = FavoriteService::new(db);

    service.remove_planet_favorite(user.id, planet.id).await?;
    let result = service.remove_planet_favorite(user.id, planet.id).await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::NotFound { .. }))
    ));

    Ok(())
}
