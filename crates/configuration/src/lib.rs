use crate::error::ConfigError;
use crate::settings::Config;
use config::{Environment, File, FileFormat};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalyticsSettings, Logging, TradeOrdering};
pub use telemetry::init_tracing;

const ENV_PREFIX: &str = "TRADELOG";

/// Loads the application configuration.
///
/// With an explicit `path` the file must exist. Without one, `config.toml` in the
/// working directory is used when present and the built-in defaults otherwise.
/// Environment variables such as `TRADELOG__ANALYTICS__ORDERING=chronological`
/// override either source.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Builds the configuration from an in-memory TOML document, without consulting
/// the environment.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let analytics = &config.analytics;
    if analytics.most_used_tags_limit == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.most_used_tags_limit must be greater than 0".to_string(),
        ));
    }
    if analytics.most_profitable_tags_limit == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.most_profitable_tags_limit must be greater than 0".to_string(),
        ));
    }
    telemetry::build_filter(&config.logging.level)?;
    Ok(())
}
