use super::*;

/// Tests that a scan replaces previous scan rows but keeps self-registered ones.
///
/// Expected: Ok with stale scan row removed and command row untouched
#[tokio::test]
async fn replaces_only_scanned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .friendcode("1000000000000001")
        .build()
        .await?;
    factory::allowed_account::AllowedAccountFactory::new(db)
        .friendcode("1000000000000002")
        .scanned()
        .build()
        .await?;

    let repo = AllowedAccountRepository::new(db);
    let inserted = repo
        .replace_scanned(
            guild_id(),
            &[params("1000000000000003", "", false, AccountSource::Scan)],
        )
        .await?;

    assert_eq!(inserted, 1);

    let remaining: Vec<String> = repo
        .get_by_guild(guild_id())
        .await?
        .into_iter()
        .map(|a| a.friendcode)
        .collect();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.contains(&"1000000000000001".to_string()));
    assert!(remaining.contains(&"1000000000000003".to_string()));

    Ok(())
}

/// Tests that a scanned friend code already self-registered is skipped.
///
/// Expected: Ok(0) and the command row keeps its owner
#[tokio::test]
async fn keeps_self_registered_row_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .friendcode("1000000000000001")
        .discord_username("ash")
        .build()
        .await?;

    let repo = AllowedAccountRepository::new(db);
    let inserted = repo
        .replace_scanned(
            guild_id(),
            &[params("1000000000000001", "", false, AccountSource::Scan)],
        )
        .await?;

    assert_eq!(inserted, 0);

    let stored = AllowedAccount::find()
        .filter(entity::allowed_account::Column::Friendcode.eq("1000000000000001"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.discord_username, "ash");
    assert_eq!(stored.source, "command");

    Ok(())
}

/// Tests that scanned rows of other guilds are left alone.
///
/// Expected: Ok with the other guild's scan row still present
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::allowed_account::AllowedAccountFactory::new(db)
        .guild_id("42")
        .scanned()
        .build()
        .await?;

    let repo = AllowedAccountRepository::new(db);
    repo.replace_scanned(guild_id(), &[]).await?;

    let other = repo.get_by_guild(42).await?;
    assert_eq!(other.len(), 1);

    Ok(())
}
