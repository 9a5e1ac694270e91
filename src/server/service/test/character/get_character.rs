use super::*;

/// Tests the serialized form of a character with optional fields missing.
///
/// Expected: Ok with null optional fields and the people favorite inlined
#[tokio::test]
async fn serializes_missing_fields_as_null() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::character::CharacterFactory::new(db)
        .name("Chewbacca")
        .build()
        .await?;
    factory::create_character_favorite(db, user.id, character.id).await?;
    let service = CharacterService::new(db);

    let found = service.get_character(character.id).await?;
    let all = service.get_all_characters().await?;
    let json = serde_json::to_value(found.unwrap().into_dto()).unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(json["name"], "Chewbacca");
    assert!(json["occupation"].is_null());
    assert!(json["birthdate"].is_null());
    assert_eq!(json["favorites"][0]["name_of_favorite"], "people");

    Ok(())
}

/// Tests fetching an unknown character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CharacterService::new(db).get_character(5).await?;

    assert!(found.is_none());

    Ok(())
}
