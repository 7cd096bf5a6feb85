use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_REFRESH_SCHEDULE: &str = "0 0 * * * *";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    pub discord_public_key: String,
    pub discord_application_id: u64,

    /// Path to the JSON role-rank table, `None` for an empty table.
    pub role_table_path: Option<String>,
    /// Six-field cron expression driving the guild refresh.
    pub refresh_schedule: String,
    pub bind_address: String,
    /// Overwrite the global slash commands on startup.
    pub register_commands: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let application_id = required("DISCORD_APPLICATION_ID")?;
        let discord_application_id =
            application_id
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "DISCORD_APPLICATION_ID".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_token: required("DISCORD_TOKEN")?,
            discord_public_key: required("DISCORD_PUBLIC_KEY")?,
            discord_application_id,
            role_table_path: std::env::var("ROLE_TABLE_PATH").ok(),
            refresh_schedule: std::env::var("REFRESH_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_REFRESH_SCHEDULE.to_string()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            register_commands: std::env::var("REGISTER_COMMANDS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
