use super::*;

/// Tests listing and finding star systems.
///
/// Expected: get_all returns both systems in id order, get_by_id finds the second
#[tokio::test]
async fn lists_and_finds_star_systems() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_star_system(db).await?;
    let second = factory::star_system::StarSystemFactory::new(db)
        .name("Hoth System")
        .galactic_coordinates("K-18")
        .build()
        .await?;
    let repo = StarSystemRepository::new(db);

    let systems = repo.get_all().await?;
    let found = repo.get_by_id(second.id).await?;

    assert_eq!(systems.len(), 2);
    assert_eq!(systems[0].id, first.id);
    assert!(found.is_some());
    assert_eq!(found.unwrap().galactic_coordinates.as_deref(), Some("K-18"));

    Ok(())
}

/// Tests finding a star system id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_star_system() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = StarSystemRepository::new(db).get_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
