use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::debug;

/// Environment prefix for overrides (`FOLIO__PROFILE__GITHUB_ACCOUNT` maps to `profile.github_account`).
pub const ENV_PREFIX: &str = "FOLIO";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// 1. **Embedded TOML**: the defaults compiled into the application (usually via `include_str!`).
/// 2. **Overrides**: an optional second TOML document layered on top.
/// 3. **Environment**: variables prefixed with `FOLIO__`, nested with double underscores.
///    In the browser there is no process environment, so this layer is simply empty.
///
/// Missing keys fall back to the target type's `#[serde(default)]` values.
///
/// # Errors
/// Returns [`ConfigError::Config`] when a layer is not valid TOML or the merged values do
/// not match the shape of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config("port = 8080", Some("port = 9090")).unwrap_or_default();
/// assert_eq!(cfg.port, 9090);
/// ```
pub fn load_config<T>(embedded: &str, overrides: Option<&str>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder().add_source(File::from_str(embedded, FileFormat::Toml));

    if let Some(overrides) = overrides {
        builder = builder.add_source(File::from_str(overrides, FileFormat::Toml));
    }

    builder = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

    debug!(overrides = overrides.is_some(), "Loading site config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
