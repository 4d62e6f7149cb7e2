use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime knobs for the parsing pipeline.
#[derive(Debug, Deserialize, Clone)]
pub struct ParserConfig {
    /// Fan parsing out over worker threads per recipe. Lines are
    /// independent, so this never changes the output, only the wall clock.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Run the metric canonicalization post-pass on parsed records
    #[serde(default = "default_canonicalize")]
    pub canonicalize: bool,
    /// Write hyphenated prefix/suffix rewrites ("non fat" -> "non-fat")
    /// back into the name. Off by default: the historical behavior computes
    /// the rewrite and discards it.
    #[serde(default)]
    pub hyphenate: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            parallel: default_parallel(),
            canonicalize: default_canonicalize(),
            hyphenate: false,
        }
    }
}

// Default value functions
fn default_parallel() -> bool {
    true
}

fn default_canonicalize() -> bool {
    true
}

impl ParserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with INGREDIENTS__ prefix
    /// 2. ingredients.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: INGREDIENTS__PARALLEL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("ingredients").required(false))
            .add_source(
                Environment::with_prefix("INGREDIENTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
