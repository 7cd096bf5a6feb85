use super::*;

/// Tests that the highest ranked role is returned.
///
/// Expected: Ok(Some) with the rank 3 role
#[tokio::test]
async fn returns_highest_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = guild_id().to_string();
    factory::create_role_assignment(db, &guild, "ash", 1, "Poke Ball", 1).await?;
    factory::create_role_assignment(db, &guild, "ash", 3, "Ultra Ball", 3).await?;
    factory::create_role_assignment(db, &guild, "ash", 2, "Great Ball", 2).await?;
    factory::create_role_assignment(db, &guild, "misty", 4, "Master Ball", 4).await?;

    let repo = RoleAssignmentRepository::new(db);
    let highest = repo
        .get_highest_by_username_and_guild("ash", guild_id())
        .await?
        .unwrap();

    assert_eq!(highest.role_name, "Ultra Ball");
    assert_eq!(highest.role_rank, 3);

    Ok(())
}

/// Tests a user without stored roles.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleAssignmentRepository::new(db);
    let highest = repo
        .get_highest_by_username_and_guild("ash", guild_id())
        .await?;

    assert!(highest.is_none());

    Ok(())
}
