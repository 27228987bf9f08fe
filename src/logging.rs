use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "profile_directory=debug,tower_http=debug,info",
        Environment::Staging => "profile_directory=debug,tower_http=info,info",
        Environment::Prod => "profile_directory=info,tower_http=info,warn",
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(env: &Environment) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    // JSON lines in production, pretty output elsewhere
    let installed = if matches!(env, Environment::Prod) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .try_init()
    };
    installed.context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized for {:?} environment", env);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_environment_has_a_parseable_default() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            let directives = default_directives(&env);
            assert!(directives.starts_with("profile_directory="));
            assert!(EnvFilter::try_new(directives).is_ok());
        }
    }
}
