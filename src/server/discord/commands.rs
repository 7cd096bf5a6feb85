use serenity::{
    all::{Command, CommandOptionType, CreateCommand, CreateCommandOption},
    http::Http,
};

use crate::server::{error::AppError, model::command::SlashCommand};

/// Builds the global application command definitions.
pub fn command_definitions() -> Vec<CreateCommand> {
    SlashCommand::ALL
        .into_iter()
        .map(|command| {
            let definition = CreateCommand::new(command.name()).description(command.description());

            match command {
                SlashCommand::SelfId => definition
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            "ign",
                            "In-game name of the account",
                        )
                        .required(true),
                    )
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::String,
                            "friendcode",
                            "16 digit friend code",
                        )
                        .required(true),
                    )
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::Boolean,
                            "main",
                            "Whether this is your main account",
                        )
                        .required(true),
                    )
                    .add_option(
                        CreateCommandOption::new(
                            CommandOptionType::Attachment,
                            "screenshot",
                            "Screenshot of the in-game profile",
                        )
                        .required(true),
                    ),
                _ => definition,
            }
        })
        .collect()
}

/// Overwrites the application's global slash commands.
///
/// `http` must have its application id set.
pub async fn register_global_commands(http: &Http) -> Result<(), AppError> {
    let commands = Command::set_global_commands(http, command_definitions()).await?;

    tracing::info!("Registered {} global slash commands", commands.len());

    Ok(())
}
