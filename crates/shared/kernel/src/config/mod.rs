use crate::error::{KernelErrorExt, Result};
use config::{Config, Environment, File};
use phub_domain::config::HubConfig;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `PHUB__HOME_URL`.
pub const ENV_PREFIX: &str = "PHUB";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path` (format chosen by extension; TOML, JSON and YAML are supported).
///    Optional: a missing file simply contributes nothing.
/// 2. **Environment Overrides**: variables prefixed with `PHUB__`; nested keys use double
///    underscores. `PHUB__ALLOWED_ORIGINS` accepts a comma-separated list.
///
/// # Errors
/// Returns an error if the sources cannot be read or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use phub_kernel::config::load_config;
/// use phub_kernel::domain::config::HubConfig;
///
/// let cfg: HubConfig = load_config("does-not-exist.toml").unwrap_or_default();
/// assert_eq!(cfg.title, "Projects Hub");
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let builder = Config::builder().add_source(File::from(path).required(false)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .convert_case(config::Case::Snake)
            .list_separator(",")
            .with_list_parse_key("allowed_origins")
            .try_parsing(true),
    );

    info!("Loading settings from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}

/// Loads [`HubConfig`] from `path` plus environment, falling back to defaults per key.
///
/// # Errors
/// See [`load_config`].
pub fn load_settings(path: impl AsRef<Path>) -> Result<HubConfig> {
    load_config(path)
}
