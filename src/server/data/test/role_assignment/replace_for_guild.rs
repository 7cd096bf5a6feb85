use super::*;

/// Tests that replacing the snapshot drops the previous rows.
///
/// Expected: Ok with only the new assignments stored
#[tokio::test]
async fn replaces_previous_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_assignment(db, &guild_id().to_string(), "gary", 1, "Poke Ball", 1)
        .await?;

    let repo = RoleAssignmentRepository::new(db);
    let written = repo
        .replace_for_guild(
            guild_id(),
            &[
                assignment(2, "ash", "Great Ball", 2),
                assignment(2, "misty", "Great Ball", 2),
            ],
        )
        .await?;

    assert_eq!(written, 2);

    let stored = repo.get_by_guild(guild_id()).await?;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|a| a.username != "gary"));

    Ok(())
}

/// Tests that an empty input clears the guild's snapshot.
///
/// Expected: Ok(0) with no rows left for the guild and other guilds untouched
#[tokio::test]
async fn clears_guild_on_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_assignment(db, &guild_id().to_string(), "ash", 1, "Poke Ball", 1).await?;
    factory::create_role_assignment(db, "42", "ash", 1, "Poke Ball", 1).await?;

    let repo = RoleAssignmentRepository::new(db);
    let written = repo.replace_for_guild(guild_id(), &[]).await?;

    assert_eq!(written, 0);
    assert!(repo.get_by_guild(guild_id()).await?.is_empty());
    assert_eq!(repo.get_by_guild(42).await?.len(), 1);

    Ok(())
}
