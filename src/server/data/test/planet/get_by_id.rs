use super::*;

/// Tests that a planet carries every favorite referencing it.
///
/// Two different users favorite the same planet.
///
/// Expected: Ok(Some) with two favorites labelled `planet`
#[tokio::test]
async fn includes_favorites_from_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::create_user(db).await?;
    let leia = factory::create_user(db).await?;
    let planet = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .population(2_000_000_000)
        .build()
        .await?;
    factory::create_planet_favorite(db, luke.id, planet.id).await?;
    factory::create_planet_favorite(db, leia.id, planet.id).await?;

    let found = PlanetRepository::new(db).get_by_id(planet.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Alderaan");
    assert_eq!(found.population, 2_000_000_000);
    assert_eq!(found.favorites.len(), 2);
    assert!(found
        .favorites
        .iter()
        .all(|f| f.name_of_favorite == "planet"));

    Ok(())
}

/// Tests finding a planet id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlanetRepository::new(db).get_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
