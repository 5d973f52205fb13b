//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port to bind to
    pub port: u16,

    /// Working-hours calendar settings
    pub workday: WorkdayConfig,

    /// Per-request payload limits
    pub limits: LimitsConfig,

    /// Bearer-token authentication settings
    pub auth: AuthConfig,
}

/// Working-hours calendar configuration.
///
/// Tasks are only placed between `start_hour` and `end_hour` (UTC), Monday
/// through Friday. Weekend days are skipped entirely.
#[derive(Debug, Clone)]
pub struct WorkdayConfig {
    /// First working hour of the day (inclusive), 0-23
    pub start_hour: u32,

    /// End of the working day (exclusive), 1-24
    pub end_hour: u32,
}

/// Limits applied to incoming scheduling requests.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Maximum number of tasks accepted in a single request
    pub max_tasks_per_request: usize,

    /// Maximum estimated hours accepted for a single task
    pub max_estimated_hours: i64,
}

/// Authentication configuration.
///
/// Token issuance and verification belong to the external auth service; this
/// service only checks that a bearer token is attached when required.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Whether requests must carry an `Authorization: Bearer <token>` header.
    /// In debug builds, this defaults to false for easier local development.
    pub required: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8085,
            workday: WorkdayConfig::default(),
            limits: LimitsConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_tasks_per_request: 500,
            max_estimated_hours: 1000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // In debug builds skip the auth check by default for easier local development
            required: !cfg!(debug_assertions),
        }
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PORT`: Server port (default: 8085)
    /// - `WORKDAY_START_HOUR`: First working hour, UTC (default: 9)
    /// - `WORKDAY_END_HOUR`: End of the working day, UTC (default: 17)
    /// - `MAX_TASKS_PER_REQUEST`: Max tasks in one request (default: 500)
    /// - `MAX_ESTIMATED_HOURS`: Max estimated hours per task (default: 1000)
    /// - `AUTH_REQUIRED`: Require bearer token (default: 0 in debug, 1 in release)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_env_or("PORT", 8085)?;

        let workday = WorkdayConfig {
            start_hour: parse_env_or("WORKDAY_START_HOUR", 9)?,
            end_hour: parse_env_or("WORKDAY_END_HOUR", 17)?,
        };

        let limits = LimitsConfig {
            max_tasks_per_request: parse_env_or("MAX_TASKS_PER_REQUEST", 500)?,
            max_estimated_hours: parse_env_or("MAX_ESTIMATED_HOURS", 1000)?,
        };

        let auth = AuthConfig {
            required: parse_env_or(
                "AUTH_REQUIRED",
                if cfg!(debug_assertions) { 0 } else { 1 },
            )? != 0,
        };

        let config = Self {
            port,
            workday,
            limits,
            auth,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.workday.end_hour > 24 {
            return Err(ConfigError {
                field: "WORKDAY_END_HOUR".to_string(),
                message: "Cannot be greater than 24".to_string(),
            });
        }

        if self.workday.start_hour >= self.workday.end_hour {
            return Err(ConfigError {
                field: "WORKDAY_START_HOUR".to_string(),
                message: "Must be less than WORKDAY_END_HOUR".to_string(),
            });
        }

        if self.limits.max_tasks_per_request == 0 {
            return Err(ConfigError {
                field: "MAX_TASKS_PER_REQUEST".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.limits.max_estimated_hours <= 0 {
            return Err(ConfigError {
                field: "MAX_ESTIMATED_HOURS".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse an environment variable or return a default value.
fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(val) => val.parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        Err(_) => Ok(default),
    }
}
