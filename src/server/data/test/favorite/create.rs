use super::*;

/// Tests creating a planet favorite.
///
/// Expected: Ok with kind `planet` stored as the favorite's label
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.target, FavoriteTarget::Planet(planet.id));
    assert_eq!(favorite.name_of_favorite, "planet");

    Ok(())
}

/// Tests creating a character favorite.
///
/// Expected: Ok with kind `people` stored as the favorite's label
#[tokio::test]
async fn creates_character_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let favorite = FavoriteRepository::new(db)
        .create(user.id, FavoriteTarget::Character(character.id))
        .await?;

    assert_eq!(favorite.target, FavoriteTarget::Character(character.id));
    assert_eq!(favorite.name_of_favorite, "people");

    Ok(())
}

/// Tests that the unique index rejects a second favorite for the same planet.
///
/// Expected: Err whose SQL error is a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_with_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, FavoriteTarget::Planet(planet.id))
        .await?;
    let result = repo
        .create(user.id, FavoriteTarget::Planet(planet.id))
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a planet favorite and a character favorite with the same numeric id do
/// not collide.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_planet_and_character_with_same_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    assert_eq!(planet.id, character.id);
    let repo = FavoriteRepository::new(db);

    repo.create(user.id, FavoriteTarget::Planet(planet.id))
        .await?;
    repo.create(user.id, FavoriteTarget::Character(character.id))
        .await?;

    assert_eq!(repo.get_by_user(user.id).await?.len(), 2);

    Ok(())
}
