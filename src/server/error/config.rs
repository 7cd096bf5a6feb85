use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// README for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// The role-rank table file could not be read or parsed.
    #[error("Failed to load role table from '{path}': {reason}")]
    RoleTable { path: String, reason: String },
}
