use super::*;

/// Tests adding a planet favorite and listing it back.
///
/// Expected: Ok, and the user's favorites contain exactly one planet favorite
#[tokio::test]
async fn adds_favorite_visible_in_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let service = FavoriteService::new(db);

    let favorite = service.add_planet_favorite(user.id, planet.id).await?;
    let favorites = service.list_favorites(user.id).await?;

    assert_eq!(favorite.name_of_favorite, "planet");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));

    Ok(())
}

/// Tests adding the same planet twice.
///
/// Expected: Err(AlreadyExists) on the second add and the count stays at one
#[tokio::test]
async fn rejects_duplicate_planet() -> Result<(), AppError> {
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
    let result = service.add_planet_favorite(user.id, planet.id).await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::AlreadyExists { target, .. }))
            if target == FavoriteTarget::Planet(planet.id)
    ));
    assert_eq!(service.list_favorites(user.id).await?.len(), 1);

    Ok(())
}

/// Tests adding a favorite for a planet that does not exist.
///
/// Expected: Err(PlanetNotFound) and no favorite created
#[tokio::test]
async fn fails_for_missing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = FavoriteService::new(db);

    let result = service.add_planet_favorite(user.id, 404).await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::PlanetNotFound(404)))
    ));
    assert!(service.list_favorites(user.id).await?.is_empty());

    Ok(())
}

/// Tests that two users can favorite the same planet.
///
/// Expected: Ok for both users, one favorite each
#[tokio::test]
async fn allows_same_planet_for_different_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let service = FavoriteService::new(db);

    service.add_planet_favorite(luke.id, planet.id).await?;
    service.add_planet_favorite(leia.id, planet.id).await?;

    assert_eq!(service.list_favorites(luke.id).await?.len(), 1);
    assert_eq!(service.list_favorites(leia.id).await?.len(), 1);

    Ok(())
}
