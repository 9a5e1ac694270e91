use super::*;

/// Tests listing planets in ascending id order.
///
/// Expected: Ok with both planets, lowest id first
#[tokio::test]
async fn returns_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    let hoth = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .build()
        .await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, tatooine.id);
    assert_eq!(planets[1].id, hoth.id);

    Ok(())
}

/// Tests listing planets when none exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}
