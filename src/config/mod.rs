#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::StoreConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.storefront";
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Shopping cart backed by the storefront API")]
pub struct CliConfig {
    /// Base URL of the products/stock API
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Directory holding the persisted cart
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Storage key of the cart snapshot
    #[arg(long)]
    pub cart_key: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// TOML configuration file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges defaults, the optional config file and command-line flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from(&StoreConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(path) = &self.storage_path {
            settings.storage_path = path.clone();
        }
        if let Some(key) = &self.cart_key {
            settings.cart_key = key.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout_seconds = timeout;
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;

        Ok(settings)
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub storage_path: String,
    pub cart_key: String,
    pub request_timeout_seconds: u64,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
            json_logs: false,
        }
    }
}

impl From<&StoreConfig> for Settings {
    fn from(config: &StoreConfig) -> Self {
        Self {
            api_endpoint: config.api_endpoint().to_string(),
            storage_path: config.storage_path().to_string(),
            cart_key: config.cart_key().to_string(),
            request_timeout_seconds: config.request_timeout_seconds(),
            verbose: config.verbose(),
            json_logs: config.json_logs(),
        }
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn cart_key(&self) -> &str {
        &self.cart_key
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_range("timeout", self.request_timeout_seconds, 1, 300)?;
        validation::validate_path("storage_path", &self.storage_path)?;
        validation::validate_non_empty_string("cart_key", &self.cart_key)?;
        Ok(())
    }
}
