use crate::acquire::Acquirer;
use crate::acquire::Budget;
use crate::geo::GeoPoint;
use crate::geo::Region;
use super::Loader;
use crate::imagery::Signer;
use crate::imagery::StreetView;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Server settings. Every flag falls back to an environment variable.
#[derive(Clone, clap::Parser)]
#[command(name = "litterview", about = "Serves validated Street View points")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = crate::DEFAULT_BIND_ADDR)]
    pub bind: String,
    /// Maps platform API key.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// URL signing secret, url-safe base64.
    #[arg(long, env = "GOOGLE_MAPS_SIGNING_SECRET", hide_env_values = true)]
    pub signing_secret: Option<String>,
    /// Imagery provider origin.
    #[arg(long, env = "STREETVIEW_BASE_URL", default_value = crate::DEFAULT_IMAGERY_URL)]
    pub imagery_url: String,
    /// Origin the browser loads the Maps JavaScript API from.
    /// Kept apart from the metadata origin so a stub or proxy for the
    /// server's calls is never handed to browsers.
    #[arg(long, env = "MAPS_JS_URL", default_value = crate::DEFAULT_IMAGERY_URL)]
    pub maps_url: String,
    /// Points per game.
    #[arg(long, env = "POINTS", default_value_t = crate::POINTS_PER_GAME)]
    pub points: usize,
    /// Oracle calls allowed per request.
    #[arg(long, env = "MAX_ATTEMPTS", default_value_t = crate::MAX_ATTEMPTS)]
    pub max_attempts: usize,
    /// Seconds allowed per request.
    #[arg(long, env = "DEADLINE_SECS", default_value_t = crate::ACQUISITION_DEADLINE.as_secs())]
    pub deadline_secs: u64,
    /// Seconds allowed per metadata call.
    #[arg(long, env = "ORACLE_TIMEOUT_SECS", default_value_t = crate::ORACLE_TIMEOUT.as_secs())]
    pub oracle_timeout_secs: u64,
    /// Only accept imagery whose copyright mentions this source.
    #[arg(long, env = "COPYRIGHT")]
    pub copyright: Option<String>,
    /// JSON array of regions to sample instead of the built-in cities.
    #[arg(long, env = "REGIONS_FILE")]
    pub regions_file: Option<PathBuf>,
    /// JSON array of trusted points appended to every game.
    #[arg(long, env = "CURATED_FILE")]
    pub curated_file: Option<PathBuf>,
}

impl Config {
    pub fn budget(&self) -> Budget {
        Budget::new(self.max_attempts, Duration::from_secs(self.deadline_secs))
    }

    pub fn regions(&self) -> anyhow::Result<Vec<Region>> {
        match self.regions_file {
            None => Ok(Region::cities()),
            Some(ref path) => {
                let regions = read::<Vec<Region>>(path)?;
                for region in regions.iter() {
                    region
                        .check()
                        .with_context(|| format!("invalid region in {}", path.display()))?;
                }
                Ok(regions)
            }
        }
    }

    pub fn curated(&self) -> anyhow::Result<Vec<GeoPoint>> {
        match self.curated_file {
            None => Ok(Vec::new()),
            Some(ref path) => read::<Vec<GeoPoint>>(path),
        }
    }

    pub fn signer(&self) -> anyhow::Result<Option<Signer>> {
        self.signing_secret
            .as_deref()
            .map(Signer::new)
            .transpose()
            .context("GOOGLE_MAPS_SIGNING_SECRET")
    }

    pub fn oracle(&self) -> anyhow::Result<StreetView> {
        Ok(
            StreetView::new(
                self.api_key.as_str(),
                Duration::from_secs(self.oracle_timeout_secs),
            )?
            .with_origin(self.imagery_url.as_str())
            .with_signer(self.signer()?)
            .with_source(self.copyright.clone()),
        )
    }

    pub fn loader(&self) -> Loader {
        Loader::new(self.maps_url.as_str(), self.api_key.as_str())
    }

    /// Fully configured acquirer. Fails fast on an unsatisfiable quota.
    pub fn acquirer(&self) -> anyhow::Result<Acquirer> {
        let acquirer = Acquirer::new(Arc::new(self.oracle()?), self.regions()?)
            .with_target(self.points)
            .with_curated(self.curated()?)
            .with_budget(self.budget());
        acquirer.quota()?;
        Ok(acquirer)
    }
}

fn read<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(
            ["litterview", "--api-key", "KEY"]
                .iter()
                .chain(args.iter())
                .copied(),
        )
        .unwrap()
    }
    fn scratch(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("litterview-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.points, crate::POINTS_PER_GAME);
        assert_eq!(config.budget(), Budget::default());
        assert_eq!(config.regions().unwrap(), Region::cities());
        assert!(config.curated().unwrap().is_empty());
        assert!(config.signer().unwrap().is_none());
        assert_eq!(config.acquirer().unwrap().target(), crate::POINTS_PER_GAME);
    }
    #[test]
    fn browser_script_origin_is_independent_of_metadata_origin() {
        let config = parse(&["--imagery-url", "http://127.0.0.1:8080"]);
        let url = config.oracle().unwrap().url(&GeoPoint::new(1.0, 2.0));
        assert!(url.starts_with("http://127.0.0.1:8080/maps/api/streetview/metadata?"));
        let script = config.loader().script(None).unwrap();
        assert!(script.contains("\"https://maps.googleapis.com/maps/api/js?key=KEY&"));
        assert!(!script.contains("127.0.0.1"));
        let proxied = parse(&["--maps-url", "https://maps.example.com"]);
        let script = proxied.loader().script(None).unwrap();
        assert!(script.contains("\"https://maps.example.com/maps/api/js?"));
    }
    #[test]
    fn regions_file_replaces_cities() {
        let path = scratch(
            "regions.json",
            r#"[{ "name": "Fort", "min_lat": 18.93, "max_lat": 18.94, "min_lon": 72.83, "max_lon": 72.84 }]"#,
        );
        let config = parse(&["--regions-file", path.to_str().unwrap()]);
        let regions = config.regions().unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name, "Fort");
    }
    #[test]
    fn inverted_region_file_is_rejected() {
        let path = scratch(
            "inverted.json",
            r#"[{ "name": "Bad", "min_lat": 19.0, "max_lat": 18.0, "min_lon": 72.0, "max_lon": 73.0 }]"#,
        );
        let config = parse(&["--regions-file", path.to_str().unwrap()]);
        assert!(config.regions().is_err());
    }
    #[test]
    fn curated_file_reserves_quota() {
        let path = scratch(
            "curated.json",
            r#"[{ "lat": 18.9220, "lon": 72.8347, "name": "Gateway of India" }]"#,
        );
        let config = parse(&["--curated-file", path.to_str().unwrap(), "--points", "4"]);
        let acquirer = config.acquirer().unwrap();
        assert_eq!(acquirer.quota().unwrap(), 3);
    }
    #[test]
    fn oversized_curated_list_fails_fast() {
        let path = scratch(
            "oversized.json",
            r#"[{ "lat": 1.0, "lon": 1.0 }, { "lat": 2.0, "lon": 2.0 }]"#,
        );
        let config = parse(&["--curated-file", path.to_str().unwrap(), "--points", "1"]);
        assert!(config.acquirer().is_err());
    }
    #[test]
    fn bad_signing_secret_fails_fast() {
        let config = parse(&["--signing-secret", "%%%"]);
        assert!(config.signer().is_err());
        assert!(config.oracle().is_err());
    }
}
