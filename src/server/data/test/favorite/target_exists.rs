use super::*;

/// Tests existence checks for planet and character targets.
///
/// Expected: true for created rows, false for unknown ids
#[tokio::test]
async fn checks_target_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    let repo = FavoriteRepository::new(db);

    assert!(repo.target_exists(FavoriteTarget::Planet(planet.id)).await?);
    assert!(repo
        .target_exists(FavoriteTarget::Character(character.id))
        .await?);
    assert!(!repo.target_exists(FavoriteTarget::Planet(999)).await?);
    assert!(!repo.target_exists(FavoriteTarget::Character(999)).await?);

    Ok(())
}
