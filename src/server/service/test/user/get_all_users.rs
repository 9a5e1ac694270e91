use super::*;

/// Tests the serialized user list.
///
/// The password column is populated in the database but must not appear anywhere in
/// the DTOs, while favorites are inlined with only id and label.
///
/// Expected: Ok with password absent and favorites reduced to id and name_of_favorite
#[tokio::test]
async fn serialized_users_omit_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password("correct horse battery staple")
        .build()
        .await?;
    let planet = factory::create_planet(db).await?;
    let favorite = factory::create_planet_favorite(db, user.id, planet.id).await?;

    let users = UserService::new(db).get_all_users().await?;
    let json = serde_json::to_value(
        users
            .into_iter()
            .map(|user| user.into_dto())
            .collect::<Vec<_>>(),
    )
    .unwrap();

    assert!(json[0].get("password").is_none());
    assert!(!json.to_string().contains("correct horse"));
    assert_eq!(
        json[0]["favorites"],
        serde_json::json!([{ "id": favorite.id, "name_of_favorite": "planet" }])
    );

    Ok(())
}
