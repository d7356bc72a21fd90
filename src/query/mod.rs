//! Search inputs: the four-field parameter record and the map anchor it carries.

use std::fmt;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::SearchError;

pub const DEFAULT_ZOOM: u8 = 14;

/// Map viewport the search is centred on, rendered as `@<lat>,<lng>,<zoom>z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoAnchor {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

impl GeoAnchor {
    pub fn new(lat: f64, lng: f64, zoom: u8) -> Result<Self, SearchError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SearchError::InvalidParameter {
                name: "lat",
                reason: format!("{lat} is outside [-90, 90]"),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(SearchError::InvalidParameter {
                name: "lng",
                reason: format!("{lng} is outside [-180, 180]"),
            });
        }
        if !(3..=21).contains(&zoom) {
            return Err(SearchError::InvalidParameter {
                name: "zoom",
                reason: format!("{zoom} is outside [3, 21]"),
            });
        }
        Ok(Self { lat, lng, zoom })
    }
}

impl fmt::Display for GeoAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{},{},{}z", self.lat, self.lng, self.zoom)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub engine: String,
    pub q: String,
    pub ll: String,
    pub api_key: String,
}

// api_key stays out of logs and panics
impl fmt::Debug for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParameters")
            .field("engine", &self.engine)
            .field("q", &self.q)
            .field("ll", &self.ll)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl QueryParameters {
    pub fn new(
        engine: impl Into<String>,
        q: impl Into<String>,
        ll: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let params = Self {
            engine: engine.into().trim().to_string(),
            q: q.into().trim().to_string(),
            ll: ll.into().trim().to_string(),
            api_key: api_key.into().trim().to_string(),
        };
        for (key, value) in params.as_pairs() {
            if value.is_empty() {
                return Err(SearchError::MissingParameter(key));
            }
        }
        Ok(params)
    }

    /// CLI flags win over config; each field must end up non-empty.
    pub fn resolve(cli: &Cli, cfg: &Config) -> Result<Self, SearchError> {
        let pick = |flag: Option<&String>, key: &str| -> String {
            flag.filter(|s| !s.trim().is_empty())
                .cloned()
                .or_else(|| cfg.get(key))
                .unwrap_or_default()
        };

        let ll = match (cli.lat, cli.lng) {
            (Some(lat), Some(lng)) => {
                GeoAnchor::new(lat, lng, cli.zoom.unwrap_or(DEFAULT_ZOOM))?.to_string()
            }
            _ => pick(cli.ll.as_ref(), "SERPAPI_LL"),
        };

        Self::new(
            pick(cli.engine.as_ref(), "SERPAPI_ENGINE"),
            pick(cli.query.as_ref(), "SERPAPI_QUERY"),
            ll,
            pick(cli.api_key.as_ref(), "SERPAPI_API_KEY"),
        )
    }

    pub fn as_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("engine", self.engine.as_str()),
            ("q", self.q.as_str()),
            ("ll", self.ll.as_str()),
            ("api_key", self.api_key.as_str()),
        ]
    }
}
