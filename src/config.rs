// src/config.rs

//! Environment configuration for the account credential and the
//! notification mailer.

use std::env;
use std::fmt;

use serde::Serialize;

use crate::error::{AppError, Result};

pub const ENV_USERNAME: &str = "LOTTO_USERNAME";
pub const ENV_PASSWORD: &str = "LOTTO_PASSWORD";
pub const ENV_EMAIL_FROM: &str = "LOTTO_EMAIL_FROM";
pub const ENV_EMAIL_TO: &str = "LOTTO_EMAIL_TO";
pub const ENV_SMTP_HOST: &str = "LOTTO_EMAIL_SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "LOTTO_EMAIL_SMTP_PORT";
pub const ENV_SMTP_USERNAME: &str = "LOTTO_EMAIL_USERNAME";
pub const ENV_SMTP_PASSWORD: &str = "LOTTO_EMAIL_PASSWORD";

const REDACTED: &str = "********";

/// Root application configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub credential: CredentialConfig,
    pub email: EmailConfig,
}

/// Lottery site account.
#[derive(Clone, Serialize)]
pub struct CredentialConfig {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// SMTP settings for result and failure mail.
#[derive(Clone, Serialize)]
pub struct EmailConfig {
    pub from: String,

    /// Recipients, in the order listed
    pub to: Vec<String>,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::config(format!("{key} is not set")))
        };

        let credential = CredentialConfig {
            username: required(ENV_USERNAME)?,
            password: required(ENV_PASSWORD)?,
        };

        let to = parse_recipients(&required(ENV_EMAIL_TO)?);
        if to.is_empty() {
            return Err(AppError::config(format!(
                "{ENV_EMAIL_TO} has no recipients"
            )));
        }

        let port = required(ENV_SMTP_PORT)?;
        let smtp_port = port.parse().map_err(|_| {
            AppError::config(format!("{ENV_SMTP_PORT} is not a valid port: {port}"))
        })?;

        let email = EmailConfig {
            from: required(ENV_EMAIL_FROM)?,
            to,
            smtp_host: required(ENV_SMTP_HOST)?,
            smtp_port,
            username: required(ENV_SMTP_USERNAME)?,
            password: required(ENV_SMTP_PASSWORD)?,
        };

        Ok(Self { credential, email })
    }
}

/// Split a comma separated recipient list, dropping empty entries.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}
