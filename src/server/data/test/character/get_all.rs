use super::*;

/// Tests listing characters in ascending id order with their favorites.
///
/// Expected: Ok with the favorited character carrying one favorite and the other none
#[tokio::test]
async fn returns_characters_with_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vader = factory::character::CharacterFactory::new(db)
        .name("Darth Vader")
        .build()
        .await?;
    let yoda = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;
    factory::create_character_favorite(db, user.id, yoda.id).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, vader.id);
    assert!(characters[0].favorites.is_empty());
    assert_eq!(characters[1].id, yoda.id);
    assert_eq!(characters[1].favorites.len(), 1);
    assert_eq!(characters[1].favorites[0].name_of_favorite, "people");

    Ok(())
}
