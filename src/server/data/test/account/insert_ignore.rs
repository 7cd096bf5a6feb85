use super::*;

/// Tests inserting an account that does not exist yet.
///
/// Expected: Ok(true) with one row carrying the given values
#[tokio::test]
async fn inserts_new_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllowedAccountRepository::new(db);
    let inserted = repo
        .insert_ignore(&params("1111222233334444", "ash", true, AccountSource::Command))
        .await?;

    assert!(inserted);

    let stored = repo
        .find_by_friendcode_and_guild("1111222233334444", guild_id())
        .await?
        .unwrap();
    assert_eq!(stored.discord_username, "ash");
    assert!(stored.is_main);
    assert_eq!(stored.source, AccountSource::Command);
    assert_eq!(stored.created_at, stored.modified_at);

    Ok(())
}

/// Tests that a duplicate `(friendcode, guild)` keeps the existing row.
///
/// Expected: Ok(false) and the original owner is preserved
#[tokio::test]
async fn ignores_duplicate_friendcode_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllowedAccountRepository::new(db);
    repo.insert_ignore(&params("1111222233334444", "ash", true, AccountSource::Command))
        .await?;
    let inserted = repo
        .insert_ignore(&params("1111222233334444", "misty", false, AccountSource::Scan))
        .await?;

    assert!(!inserted);

    let count = AllowedAccount::find().count(db).await?;
    assert_eq!(count, 1);

    let stored = repo
        .find_by_friendcode_and_guild("1111222233334444", guild_id())
        .await?
        .unwrap();
    assert_eq!(stored.discord_username, "ash");

    Ok(())
}

/// Tests that the same friend code may be registered in two guilds.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_same_friendcode_in_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AllowedAccountRepository::new(db);
    let first = params("1111222233334444", "ash", true, AccountSource::Command);
    let mut second = first.clone();
    second.guild_id = 42;

    assert!(repo.insert_ignore(&first).await?);
    assert!(repo.insert_ignore(&second).await?);

    Ok(())
}
