use super::*;

/// Tests listing a user's favorites in id order.
///
/// Expected: Ok with the planet favorite first and the character favorite second
#[tokio::test]
async fn returns_user_favorites_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_planet_favorite(db, user.id, planet.id).await?;
    factory::create_character_favorite(db, user.id, character.id).await?;
    factory::create_planet_favorite(db, other.id, planet.id).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].target, FavoriteTarget::Planet(planet.id));
    assert_eq!(favorites[1].target, FavoriteTarget::Character(character.id));

    Ok(())
}

/// Tests listing favorites for a user who has none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorites = FavoriteRepository::new(db).get_by_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
