/// Builds the OAuth2 link that adds the bot's commands to a guild.
pub fn invite_link(application_id: u64) -> String {
    format!(
        "https://discord.com/oauth2/authorize?client_id={}&scope=applications.commands",
        application_id
    )
}
