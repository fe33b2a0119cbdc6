use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::ContactEmail;
use crate::email_client::EmailClient;

/// Global configuration, loaded from the yaml files under `configuration/`.
/// See `get_configuration`.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

/// Server configuration
#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    /// Should be localhost on dev machine, 0.0.0.0 on prod
    pub host: String,

    /// Port for the server; 0 lets the OS assign a free one (used by tests)
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Mail provider configuration. The two credentials -- the account identity
/// (`sender_email`) and the secret (`authorization_token`) -- live from
/// process startup to shutdown and are never mutated.
#[derive(Clone, Deserialize)]
pub struct EmailClientSettings {
    /// URL of the provider's HTTP API
    pub base_url: String,

    /// Account identity. Submissions are sent from -and- to this inbox; the
    /// visitor's own address only ever appears in the reply-to header.
    pub sender_email: String,

    /// API secret for the provider; concealed from logs
    pub authorization_token: Secret<String>,

    /// Per-request timeout for the provider, in milliseconds
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    /// Fails if the configured inbox does not have a plausible email shape
    pub fn sender(&self) -> Result<ContactEmail, String> {
        ContactEmail::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }

    /// Build the `EmailClient` declared by this configuration. A misconfigured
    /// sender address is unrecoverable, so it fails loudly at startup rather
    /// than on the first submission.
    pub fn client(self) -> EmailClient {
        let sender = self.sender().expect("invalid sender email address");
        EmailClient::new(self.base_url, sender, self.authorization_token, self.timeout())
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )?;
        Ok(())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`.
///
/// All fields must be present in these files, otherwise initialisation will
/// fail immediately, and the server will not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .expect("could not get current dir")
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or("local".to_string())
        .try_into()
        .expect("could not initiate Environment struct");

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // source env vars, which can be (re)loaded at runtime, avoiding
            // recompilation. note: env vars are -always- parsed as String,
            // `serde-aux` is required to parse other types.
            //
            // `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN=...`
            //     -> `Settings.email_client.authorization_token`
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
