//! Discord interaction webhook.
//!
//! Discord posts every slash command invocation to `POST /bot`. Requests are
//! authenticated by their ed25519 signature, `PING`s are acknowledged, and
//! application commands are dispatched by name.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        interaction::{
            InteractionDto, InteractionResponseDto, INTERACTION_APPLICATION_COMMAND,
            INTERACTION_PING,
        },
    },
    server::{
        error::{interaction::InteractionError, AppError},
        model::{account::RegisterAccountParams, command::SlashCommand},
        service::{
            account::{format_listing, AccountService},
            guild::GuildService,
            invite::invite_link,
            registration::RegistrationService,
        },
        state::AppState,
    },
};

const BAD_SIGNATURE: &str = "Bad request signature.";
const UNKNOWN_TYPE: &str = "Unknown Type";

/// Liveness probe replying with the application id.
pub async fn liveness(State(state): State<AppState>) -> String {
    format!("👋 {}", state.application_id)
}

/// Receive a Discord interaction.
///
/// # Returns
/// - `200 OK` - `PONG` or a chat message reply
/// - `400 Bad Request` - Unknown interaction type, unknown command or failed dispatch
/// - `401 Unauthorized` - Missing or invalid signature
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !state.verifier.verify_headers(&headers, &body) {
        tracing::debug!("Rejected interaction with invalid signature");
        return (StatusCode::UNAUTHORIZED, BAD_SIGNATURE).into_response();
    }

    let interaction: InteractionDto = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            tracing::warn!("Malformed interaction payload: {}", e);
            return unknown_type();
        }
    };

    match interaction.kind {
        INTERACTION_PING => Json(InteractionResponseDto::pong()).into_response(),
        INTERACTION_APPLICATION_COMMAND => match dispatch(&state, &interaction).await {
            Ok(reply) => Json(reply).into_response(),
            Err(e) => {
                tracing::error!("Error processing command: {}", e);
                unknown_type()
            }
        },
        other => {
            tracing::error!("Unknown interaction type: {}", other);
            unknown_type()
        }
    }
}

fn unknown_type() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: UNKNOWN_TYPE.to_string(),
        }),
    )
        .into_response()
}

fn parse_id(field: &'static str, value: &str) -> Result<u64, InteractionError> {
    value.parse().map_err(|_| InteractionError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Resolves the invoking guild and user, registers the guild if unseen and
/// runs the named command.
pub async fn dispatch(
    state: &AppState,
    interaction: &InteractionDto,
) -> Result<InteractionResponseDto, AppError> {
    let data = interaction
        .data
        .as_ref()
        .ok_or(InteractionError::MissingCommandData)?;

    let guild_id = interaction
        .guild_id
        .as_deref()
        .ok_or(InteractionError::MissingContext)?;
    let guild_id = parse_id("guild_id", guild_id)?;
    let username = interaction
        .username()
        .ok_or(InteractionError::MissingContext)?;

    let guild_service = GuildService::new(&state.db, state.discord.as_ref());
    guild_service.ensure_registered(guild_id).await?;

    let command = SlashCommand::from_name(&data.name)
        .ok_or_else(|| InteractionError::UnknownCommand(data.name.clone()))?;

    tracing::debug!("{} invoked /{} in guild {}", username, command.name(), guild_id);

    match command {
        SlashCommand::Invite => Ok(InteractionResponseDto::message(
            invite_link(state.application_id),
            true,
        )),
        SlashCommand::SelfId => {
            let params = RegisterAccountParams {
                discord_username: username.to_string(),
                guild_id,
                ign: data.string_option("ign").unwrap_or_default(),
                friendcode: data.string_option("friendcode").unwrap_or_default(),
                is_main: data.bool_option("main"),
                screenshot_id: data.string_option("screenshot").unwrap_or_default(),
            };

            // Rule violations are shown to the user; storage failures fall through to a 400.
            let content = match RegistrationService::new(&state.db).register(params).await {
                Ok(message) => message,
                Err(AppError::RegistrationErr(e)) => e.to_string(),
                Err(e) => return Err(e),
            };

            Ok(InteractionResponseDto::message(content, true))
        }
        SlashCommand::List => {
            let listing = AccountService::new(&state.db)
                .list_for_user(username, guild_id)
                .await?;

            Ok(InteractionResponseDto::message(format_listing(&listing), false))
        }
        SlashCommand::Channel => {
            let channel_id = interaction
                .channel_id
                .as_deref()
                .ok_or(InteractionError::MissingChannel)?;
            let channel_id = parse_id("channel_id", channel_id)?;

            guild_service.set_roles_channel(guild_id, channel_id).await?;

            Ok(InteractionResponseDto::message(
                "This channel will now be scanned for account messages.",
                true,
            ))
        }
    }
}
