use super::*;

/// Tests that a user's accounts are returned mains first.
///
/// Expected: Ok with the main account first, other users excluded
#[tokio::test]
async fn returns_main_before_alts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .discord_username("ash")
        .build()
        .await?;
    factory::allowed_account::AllowedAccountFactory::new(db)
        .discord_username("ash")
        .is_main(true)
        .ign("Ash Main")
        .build()
        .await?;
    factory::allowed_account::AllowedAccountFactory::new(db)
        .discord_username("misty")
        .build()
        .await?;

    let repo = AllowedAccountRepository::new(db);
    let accounts = repo
        .get_by_username_and_guild("ash", guild_id(), None)
        .await?;

    assert_eq!(accounts.len(), 2);
    assert!(accounts[0].is_main);
    assert_eq!(accounts[0].ign, "Ash Main");
    assert!(!accounts[1].is_main);

    Ok(())
}

/// Tests filtering a user's accounts to alts only.
///
/// Expected: Ok with only non-main accounts
#[tokio::test]
async fn filters_by_main_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .is_main(true)
        .build()
        .await?;
    factory::create_account(db).await?;
    factory::create_account(db).await?;

    let repo = AllowedAccountRepository::new(db);
    let alts = repo
        .get_by_username_and_guild(fixture::allowed_account::DEFAULT_USERNAME, guild_id(), Some(false))
        .await?;
    let mains = repo
        .get_by_username_and_guild(fixture::allowed_account::DEFAULT_USERNAME, guild_id(), Some(true))
        .await?;

    assert_eq!(alts.len(), 2);
    assert!(alts.iter().all(|a| !a.is_main));
    assert_eq!(mains.len(), 1);

    Ok(())
}

/// Tests that accounts in other guilds are not returned.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .guild_id("42")
        .build()
        .await?;

    let repo = AllowedAccountRepository::new(db);
    let accounts = repo
        .get_by_username_and_guild(fixture::allowed_account::DEFAULT_USERNAME, guild_id(), None)
        .await?;

    assert!(accounts.is_empty());

    Ok(())
}
