use super::*;

/// Tests setting the roles channel of a known guild.
///
/// Expected: Ok with channel updated and name unchanged
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
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

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.set_roles_channel(77, "Other", 900).await?;

    assert_eq!(guild.name, "Cerulean");
    assert_eq!(guild.roles_channel_id, Some(900));

    Ok(())
}

/// Tests setting the roles channel of an unseen guild.
///
/// Expected: Ok with guild registered under the given name
#[tokio::test]
async fn registers_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.set_roles_channel(77, "Cerulean", 900).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Cerulean");
    assert_eq!(all[0].roles_channel_id, Some(900));

    Ok(())
}
