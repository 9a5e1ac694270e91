use super::*;

/// Tests listing and finding species.
///
/// Expected: species listed in id order and found by id with lifespan preserved
#[tokio::test]
async fn lists_and_finds_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wookiee = factory::species::SpeciesFactory::new(db)
        .name("Wookiee")
        .lifespan(400)
        .build()
        .await?;
    let ewok = factory::create_species(db).await?;
    let repo = SpeciesRepository::new(db);

    let species = repo.get_all().await?;
    let found = repo.get_by_id(wookiee.id).await?;

    assert_eq!(species.len(), 2);
    assert_eq!(species[0].id, wookiee.id);
    assert_eq!(species[1].id, ewok.id);
    assert_eq!(found.unwrap().lifespan, Some(400));

    Ok(())
}
