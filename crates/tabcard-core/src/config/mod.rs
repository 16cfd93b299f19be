use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

/// Default configuration file name, searched for in the working directory
/// (any extension the `config` crate understands, e.g. `tabcard.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "tabcard";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// Column bindings; when absent the columns are chosen interactively.
    #[serde(default)]
    pub mapping: Option<MappingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    /// Encode contacts on the rayon pool instead of sequentially.
    pub parallel: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Header-name bindings for each logical contact field, as written in the
/// configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MappingConfig {
    pub first_name: String,
    pub last_name: Option<String>,
    pub formatted_name: Option<String>,
    pub additional_names: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    #[serde(default)]
    pub phones: Vec<PhoneColumnConfig>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub org: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneColumnConfig {
    pub column: String,
    /// Raw phone type tag; normalized when the mapping is built.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Environment variable prefix; `TABCARD_OUTPUT_PATH` sets `output.path`.
pub const ENV_PREFIX: &str = "TABCARD";

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and a TOML
    /// file into a `Settings`.
    ///
    /// Environment variables are prefixed `TABCARD_` with nested keys joined
    /// by `_`. The file is `path` when given (and must then exist), otherwise
    /// an optional `tabcard.toml` in the working directory. File values take
    /// precedence over environment values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, environment())
    }

    fn load_from(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Ok(Config::builder()
            .set_default("output.path", "contacts.vcf")?
            .set_default("output.parallel", false)?
            .set_default("logging.level", "info")?
            // Env
            .add_source(environment)
            // TOML file
            .add_source(file)
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("_")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and the
/// configuration file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(path)?;
    tracing::debug!(
        has_mapping = settings.mapping.is_some(),
        "Configuration loaded"
    );
    Ok(settings)
}
