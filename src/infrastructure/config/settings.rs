use std::collections::HashMap;
use std::str::FromStr;

use derive_more::derive::{Display, Error};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "certs/config.yml";
pub const CONFIG_FILE_VAR: &str = "APP_CONFIG_FILE";
pub const ENV_PREFIX: &str = "APP";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SERVER_KEEPALIVE: u64 = 75;

#[derive(Debug, Display, Error)]
pub enum SettingsError {
	#[display("Could not load configuration: {_0}")]
	Load(config::ConfigError),
	#[display("Invalid ENVIRONMENT type {value}")]
	UnknownEnvironment { value: String },
	#[display("{field} can't be empty")]
	EmptyField { field: &'static str },
}

impl From<config::ConfigError> for SettingsError {
	fn from(error: config::ConfigError) -> Self {
		SettingsError::Load(error)
	}
}

/// Deployment environment of the Webpay provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
	Integration,
	Certification,
	Production,
}

impl Environment {
	pub fn default_base_url(&self) -> &'static str {
		match self {
			Environment::Integration | Environment::Certification => {
				"https://webpay3gint.transbank.cl"
			}
			Environment::Production => "https://webpay3g.transbank.cl",
		}
	}
}

impl FromStr for Environment {
	type Err = SettingsError;

	/// Accepts the English names as well as the provider's Spanish ones,
	/// ignoring case.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"integration" | "integracion" => Ok(Environment::Integration),
			"certification" | "certificacion" => Ok(Environment::Certification),
			"production" | "produccion" => Ok(Environment::Production),
			_ => Err(SettingsError::UnknownEnvironment {
				value: value.to_string(),
			}),
		}
	}
}

#[derive(Debug, Deserialize)]
struct RawConfig {
	environment:      String,
	commerce_code:    String,
	api_key:          String,
	api_secret:       String,
	#[serde(default)]
	debug:            bool,
	#[serde(default = "default_timeout_secs")]
	timeout_secs:     u64,
	#[serde(default)]
	base_url:         Option<String>,
	#[serde(default = "default_server_keepalive")]
	server_keepalive: u64,
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

fn default_server_keepalive() -> u64 {
	DEFAULT_SERVER_KEEPALIVE
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
	pub environment:      Environment,
	pub commerce_code:    String,
	pub api_key:          String,
	pub api_secret:       String,
	pub debug:            bool,
	pub timeout_secs:     u64,
	pub base_url:         Option<String>,
	pub server_keepalive: u64,
}

impl Config {
	/// Loads `certs/config.yml` (or the file named by `APP_CONFIG_FILE`)
	/// and applies `APP_*` environment overrides on top.
	pub fn load() -> Result<Self, SettingsError> {
		let path = std::env::var(CONFIG_FILE_VAR)
			.unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
		Self::load_from(&path, ENV_PREFIX)
	}

	pub fn load_from(path: &str, env_prefix: &str) -> Result<Self, SettingsError> {
		let settings = config::Config::builder()
			.add_source(
				config::File::new(path, config::FileFormat::Yaml).required(false),
			)
			.add_source(config::Environment::with_prefix(env_prefix))
			.build()?;

		let raw: RawConfig = normalize_keys(settings)?.try_deserialize()?;
		raw.validate()
	}

	/// Base URL of the provider, honouring the `base_url` override.
	pub fn provider_base_url(&self) -> &str {
		self.base_url
			.as_deref()
			.unwrap_or_else(|| self.environment.default_base_url())
	}
}

impl RawConfig {
	fn validate(self) -> Result<Config, SettingsError> {
		let environment = self.environment.parse::<Environment>()?;

		for (field, value) in [
			("API_SECRET", &self.api_secret),
			("COMMERCE_CODE", &self.commerce_code),
			("API_KEY", &self.api_key),
		] {
			if value.is_empty() {
				return Err(SettingsError::EmptyField { field });
			}
		}

		Ok(Config {
			environment,
			commerce_code: self.commerce_code,
			api_key: self.api_key,
			api_secret: self.api_secret,
			debug: self.debug,
			timeout_secs: self.timeout_secs,
			base_url: self.base_url.filter(|url| !url.is_empty()),
			server_keepalive: self.server_keepalive,
		})
	}
}

/// Legacy config files spell keys in upper case while environment overrides
/// arrive lower-cased. Folds both onto lower-case keys, letting the
/// lower-case spelling win.
fn normalize_keys(
	settings: config::Config,
) -> Result<config::Config, config::ConfigError> {
	let table: HashMap<String, config::Value> = settings.try_deserialize()?;
	let (lower, upper): (Vec<_>, Vec<_>) = table
		.into_iter()
		.partition(|(key, _)| *key == key.to_lowercase());

	let mut builder = config::Config::builder();
	for (key, value) in upper.into_iter().chain(lower) {
		builder = builder.set_override(key.to_lowercase(), value)?;
	}
	builder.build()
}
