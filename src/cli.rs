use clap::{ArgAction, ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "localsearch", about = "Print the address of every local result for a maps search", version)]
#[command(group(ArgGroup::new("anchor").args(["ll", "lat"]).multiple(false)))]
pub struct Cli {
    /// Free-text query, e.g. "Food Banks". Falls back to SERPAPI_QUERY.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Search engine identifier. Falls back to SERPAPI_ENGINE (default: google_maps).
    #[arg(long)]
    pub engine: Option<String>,

    /// Map anchor in provider form, e.g. "@40.7455096,-74.0083012,14z".
    #[arg(long, allow_hyphen_values = true)]
    pub ll: Option<String>,

    /// Latitude of the map anchor (use with --lng instead of --ll).
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the map anchor.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Zoom level for --lat/--lng (default: 14).
    #[arg(long, requires = "lat")]
    pub zoom: Option<u8>,

    /// Provider credential. Falls back to SERPAPI_API_KEY.
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Override the provider base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ll_conflicts_with_lat_lng() {
        let res = Cli::try_parse_from([
            "localsearch", "q", "--ll", "@1,2,14z", "--lat", "1", "--lng", "2",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn lat_requires_lng() {
        assert!(Cli::try_parse_from(["localsearch", "q", "--lat", "1"]).is_err());
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli = Cli::try_parse_from(["localsearch", "--lat", "-33.9", "--lng", "-74.0", "-vv"]).unwrap();
        assert_eq!(cli.lat, Some(-33.9));
        assert_eq!(cli.lng, Some(-74.0));
        assert_eq!(cli.verbose, 2);
        assert!(cli.query.is_none());
    }
}
