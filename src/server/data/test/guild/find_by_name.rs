use super::*;

/// Tests resolving a guild by its display name.
///
/// Expected: Ok(Some) for the matching guild, Ok(None) for unknown names
#[tokio::test]
async fn finds_guild_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("77")
        .name("Cerulean")
        .build()
        .await?;
    factory::create_guild(db).await?;

    let repo = DiscordGuildRepository::new(db);

    let found = repo.find_by_name("Cerulean").await?;
    assert_eq!(found.map(|g| g.guild_id), Some(77));

    let missing = repo.find_by_name("Saffron").await?;
    assert!(missing.is_none());

    Ok(())
}
