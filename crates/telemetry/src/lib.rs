//! Logging bootstrap: installs the tracing subscriber described by
//! [`TelemetrySettings`].

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. A subscriber
/// installed earlier in the process (tests) is left in place.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .with_context(|| format!("invalid tracing filter '{}'", settings.filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    let already_set = match settings.log_format {
        LogFormat::Pretty => registry.with(fmt::layer()).try_init().is_err(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init().is_err(),
    };

    if already_set {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_accepts_default_settings() {
        init(&TelemetrySettings::default()).unwrap();
    }

    #[test]
    fn repeat_init_is_harmless() {
        init(&TelemetrySettings::default()).unwrap();
        init(&TelemetrySettings::default()).unwrap();
    }
}
