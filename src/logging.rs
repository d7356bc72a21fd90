//! Diagnostics go to stderr; stdout is reserved for addresses.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// `RUST_LOG` wins, then `-v` count, then `LOG_LEVEL` from config.
pub fn init(verbose: u8, cfg: &Config) {
    let fallback = default_directive(verbose, cfg);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: u8, cfg: &Config) -> String {
    match verbose {
        0 => cfg.get("LOG_LEVEL").unwrap_or_else(|| "warn".into()),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_log_level() {
        let cfg = Config::from_pairs([("LOG_LEVEL", "error")]);
        assert_eq!(default_directive(0, &cfg), "error");
        assert_eq!(default_directive(1, &cfg), "info");
        assert_eq!(default_directive(2, &cfg), "debug");
        assert_eq!(default_directive(3, &cfg), "trace");
        assert_eq!(default_directive(7, &cfg), "trace");
    }

    #[test]
    fn defaults_to_warn() {
        let cfg = Config::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(default_directive(0, &cfg), "warn");

        let blank = Config::from_pairs([("LOG_LEVEL", " ")]);
        assert_eq!(default_directive(0, &blank), "warn");
    }
}
