use std::{
    collections::HashMap,
    env,
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use directories::BaseDirs;

pub const DEFAULT_ENGINE: &str = "google_maps";
pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let config_path = default_config_path();
        let mut map = default_map();

        read_rc_file(&config_path, &mut map);

        // Overlay environment variables (take precedence)
        for (k, v) in env::vars() {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    /// Defaults overlaid with the given pairs; neither the rc file nor the
    /// environment is consulted.
    #[allow(dead_code)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = default_map();
        for (k, v) in pairs {
            map.insert(k.into(), v.into());
        }
        Self { inner: map, config_path: default_config_path() }
    }

    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            self.inner.insert(k.into(), v.into());
        }
        self
    }

    /// Returns the value for `key`, treating blank values as unset.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse::<u64>().ok())
    }
}

fn read_rc_file(path: &Path, map: &mut HashMap<String, String>) {
    if !path.exists() {
        return;
    }
    if let Ok(file) = fs::File::open(path) {
        let reader = BufReader::new(file);
        for line in reader.lines().map_while(Result::ok) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((k, v)) = line.split_once('=') {
                map.insert(k.trim().to_string(), v.trim().to_string());
            }
        }
    }
}

fn is_config_key(k: &str) -> bool {
    const KEYS: &[&str] = &[
        "SERPAPI_ENGINE",
        "SERPAPI_QUERY",
        "SERPAPI_LL",
        "SERPAPI_API_KEY",
        "SERPAPI_BASE_URL",
        "REQUEST_TIMEOUT",
        "LOG_LEVEL",
    ];

    KEYS.contains(&k) || k.starts_with("LOCALSEARCH_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("localsearch").join(".localsearchrc")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert("SERPAPI_ENGINE".into(), DEFAULT_ENGINE.into());
    m.insert("SERPAPI_BASE_URL".into(), DEFAULT_BASE_URL.into());
    m.insert("REQUEST_TIMEOUT".into(), "60".into());
    m.insert("LOG_LEVEL".into(), "warn".into());
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_present() {
        let cfg = Config::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(cfg.get("SERPAPI_ENGINE").as_deref(), Some("google_maps"));
        assert_eq!(cfg.get("SERPAPI_BASE_URL").as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(cfg.get_u64("REQUEST_TIMEOUT"), Some(60));
        assert!(cfg.get("SERPAPI_API_KEY").is_none());
    }

    #[test]
    fn blank_values_read_as_unset() {
        let cfg = Config::from_pairs([("SERPAPI_QUERY", "   ")]);
        assert!(cfg.get("SERPAPI_QUERY").is_none());
    }

    #[test]
    fn non_numeric_timeout_is_ignored() {
        let cfg = Config::from_pairs([("REQUEST_TIMEOUT", "soon")]);
        assert_eq!(cfg.get_u64("REQUEST_TIMEOUT"), None);
    }

    #[test]
    fn rc_file_skips_comments_and_trims() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "# local overrides")?;
        writeln!(file)?;
        writeln!(file, "SERPAPI_QUERY = Food Banks ")?;
        writeln!(file, "SERPAPI_LL=@40.7455096,-74.0083012,14z")?;
        writeln!(file, "not a pair")?;

        let mut map = default_map();
        read_rc_file(file.path(), &mut map);

        assert_eq!(map.get("SERPAPI_QUERY").map(String::as_str), Some("Food Banks"));
        assert_eq!(
            map.get("SERPAPI_LL").map(String::as_str),
            Some("@40.7455096,-74.0083012,14z")
        );
        assert_eq!(map.get("SERPAPI_ENGINE").map(String::as_str), Some("google_maps"));
        Ok(())
    }

    #[test]
    fn missing_rc_file_is_skipped() {
        let mut map = default_map();
        read_rc_file(Path::new("/nonexistent/localsearch/.localsearchrc"), &mut map);
        assert_eq!(map, default_map());
    }

    #[test]
    fn overrides_replace_defaults() {
        let cfg = Config::from_pairs(Vec::<(String, String)>::new())
            .with_overrides([("REQUEST_TIMEOUT", "5")]);
        assert_eq!(cfg.get_u64("REQUEST_TIMEOUT"), Some(5));
    }

    #[test]
    fn env_keys_are_filtered() {
        assert!(is_config_key("SERPAPI_API_KEY"));
        assert!(is_config_key("LOCALSEARCH_EXTRA"));
        assert!(!is_config_key("HOME"));
    }
}
