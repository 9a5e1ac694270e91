use super::*;

/// Tests reverse lookups from a planet and a character to their favorites.
///
/// Expected: each lookup returns only favorites pointing at that target
#[tokio::test]
async fn returns_favorites_pointing_at_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_planet_favorite(db, luke.id, planet.id).await?;
    factory::create_planet_favorite(db, leia.id, planet.id).await?;
    factory::create_character_favorite(db, leia.id, character.id).await?;
    let repo = FavoriteRepository::new(db);

    let planet_favorites = repo.get_by_planet(planet.id).await?;
    let character_favorites = repo.get_by_character(character.id).await?;

    assert_eq!(planet_favorites.len(), 2);
    assert!(planet_favorites
        .iter()
        .all(|f| f.target == FavoriteTarget::Planet(planet.id)));
    assert_eq!(character_favorites.len(), 1);
    assert_eq!(character_favorites[0].user_id, leia.id);

    Ok(())
}
