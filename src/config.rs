use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Profile source
    pub profile_load_latency: Duration,
    pub seed_sample_profiles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Environment::Dev,
            server_addr: "0.0.0.0:8080".to_string(),
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            profile_load_latency: Duration::from_millis(1000),
            seed_sample_profiles: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup; unset variables
    /// fall back to [`Settings::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let env = lookup("ENV")
            .map(|s| Environment::parse(&s))
            .unwrap_or(defaults.env);
        let server_addr = lookup("SERVER_ADDR").unwrap_or(defaults.server_addr);

        // CORS
        let cors_allow_origins = match lookup("CORS_ALLOW_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_allow_origins,
        };

        // Profile source
        let profile_load_latency = match lookup("PROFILE_LOAD_LATENCY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .context("PROFILE_LOAD_LATENCY_MS must be a whole number of milliseconds")?,
            ),
            None => defaults.profile_load_latency,
        };
        let seed_sample_profiles = match lookup("SEED_SAMPLE_PROFILES") {
            Some(raw) => parse_bool(&raw).context("SEED_SAMPLE_PROFILES must be true or false")?,
            None => defaults.seed_sample_profiles,
        };

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            profile_load_latency,
            seed_sample_profiles,
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised boolean `{other}`"),
    }
}
