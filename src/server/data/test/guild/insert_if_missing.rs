use super::*;

/// Tests registering an unseen guild.
///
/// Expected: Ok(true) with no roles channel
#[tokio::test]
async fn inserts_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let inserted = repo.insert_if_missing(77, "Cerulean").await?;

    assert!(inserted);
    let guild = repo.find_by_guild_id(77).await?.unwrap();
    assert_eq!(guild.name, "Cerulean");
    assert_eq!(guild.roles_channel_id, None);

    Ok(())
}

/// Tests that an existing guild row is not overwritten.
///
/// Expected: Ok(false) with original name and channel preserved
#[tokio::test]
async fn keeps_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("77")
        .name("Cerulean")
        .roles_channel_id(Some("500".to_string()))
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let inserted = repo.insert_if_missing(77, "Renamed").await?;

    assert!(!inserted);
    let guild = repo.find_by_guild_id(77).await?.unwrap();
    assert_eq!(guild.name, "Cerulean");
    assert_eq!(guild.roles_channel_id, Some(500));

    Ok(())
}
