use super::*;

/// Tests listing users when the table is empty.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests that users are listed in ascending id order with their favorites attached.
///
/// Creates two users where only the second owns favorites, then verifies each user
/// carries exactly the favorites they own.
///
/// Expected: Ok with users ordered by id and favorites grouped per owner
#[tokio::test]
async fn returns_users_ordered_with_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_planet_favorite(db, second.id, planet.id).await?;
    factory::create_character_favorite(db, second.id, character.id).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert!(users[0].favorites.is_empty());
    assert_eq!(users[1].id, second.id);
    assert_eq!(users[1].favorites.len(), 2);
    assert!(users[1].favorites.iter().all(|f| f.user_id == second.id));

    Ok(())
}
