use super::*;

/// Tests the duplicate check against the requested character id.
///
/// Adding character 42 twice must conflict, while a different character succeeds.
///
/// Expected: Err(AlreadyExists) for the repeat, Ok for the other character
#[tokio::test]
async fn checks_uniqueness_by_requested_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut characters = Vec::new();
    for _ in 0..42 {
        characters.push(factory::create_character(db).await?);
    }
    let forty_two = &characters[41];
    let other = &characters[0];
    assert_eq!(forty_two.id, 42);
    let service = FavoriteService::new(db);

    service.add_character_favorite(user.id, forty_two.id).await?;
    let duplicate = service.add_character_favorite(user.id, forty_two.id).await;
    let different = service.add_character_favorite(user.id, other.id).await;

    assert!(matches!(
        duplicate,
        Err(AppError::FavoriteErr(FavoriteError::AlreadyExists { .. }))
    ));
    assert!(different.is_ok());
    assert_eq!(service.list_favorites(user.id).await?.len(), 2);

    Ok(())
}

/// Tests adding a favorite for a character that does not exist.
///
/// Expected: Err(CharacterNotFound)
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db)
        .add_character_favorite(user.id, 12)
        .await;

    assert!(matches!(
        result,
        Err(AppError::FavoriteErr(FavoriteError::CharacterNotFound(12)))
    ));

    Ok(())
}

/// Tests that a planet favorite does not block a character favorite with the same id.
///
/// Expected: Ok with a `people` favorite alongside the `planet` one
#[tokio::test]
async fn ignores_planet_favorite_with_same_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    let service = FavoriteService::new(db);

    service.add_planet_favorite(user.id, planet.id).await?;
    let favorite = service.add_character_favorite(user.id, character.id).await?;

    assert_eq!(favorite.name_of_favorite, "people");
    assert_eq!(service.list_favorites(user.id).await?.len(), 2);

    Ok(())
}
