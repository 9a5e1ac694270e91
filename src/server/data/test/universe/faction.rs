use super::*;

/// Tests listing and finding factions.
///
/// Expected: get_all returns the faction, get_by_id returns its fields and unknown ids are None
#[tokio::test]
async fn lists_and_finds_factions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::faction::FactionFactory::new(db)
        .name("Rebel Alliance")
        .leader("Mon Mothma")
        .affiliation("Republic")
        .build()
        .await?;
    let repo = FactionRepository::new(db);

    let factions = repo.get_all().await?;
    let found = repo.get_by_id(created.id).await?;
    let missing = repo.get_by_id(created.id + 1).await?;

    assert_eq!(factions.len(), 1);
    assert!(found.is_some());
    assert_eq!(found.unwrap().leader, "Mon Mothma");
    assert!(missing.is_none());

    Ok(())
}
