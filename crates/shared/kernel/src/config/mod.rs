use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `ESHARE__CLIENT__BASE_URL`.
pub const ENV_PREFIX: &str = "ESHARE";
/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "eshare";

/// Custom error type for config loading.
#[eshare_derive::share_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a file, then `ESHARE__` environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, an `eshare.{toml,json,yaml}`
///    file in the working directory is used if present; otherwise type defaults apply.
/// 2. **Environment Overrides**: variables prefixed with `ESHARE__`, nested with double
///    underscores (`ESHARE__CLIENT__TOKEN_FILE` maps to `client.token_file`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a value cannot be
/// parsed, or the merged tree does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use eshare_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     page_size: u32,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// # let _ = cfg.page_size;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__")
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_STEM), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment);

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Probing optional config {}", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
