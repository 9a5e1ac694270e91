use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime configuration loaded from environment variables.
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://holocron.db?mode=rwc`.
    pub database_url: String,

    /// Socket address the HTTP listener binds to.
    pub bind_address: String,

    /// User that favorite endpoints act on when the session has no user.
    pub default_user_id: Option<i32>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads `DATABASE_URL` (required), `BIND_ADDRESS` (defaults to `0.0.0.0:3000`) and
    /// `DEFAULT_USER_ID` (optional integer).
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing `DATABASE_URL` or non-integer `DEFAULT_USER_ID`
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let default_user_id = match lookup("DEFAULT_USER_ID") {
            Some(value) => Some(value.trim().parse::<i32>().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "DEFAULT_USER_ID".to_string(),
                    value,
                }
            })?),
            None => None,
        };

        Ok(Self {
            database_url,
            bind_address,
            default_user_id,
        })
    }
}
