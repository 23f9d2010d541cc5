use super::*;
use crate::acquire::Oracle;
use crate::acquire::Verdict;
use crate::geo::GeoPoint;
use std::time::Duration;

const METADATA_PATH: &str = "/maps/api/streetview/metadata";

/// Oracle backed by the Street View metadata endpoint.
/// One GET per candidate; metadata requests are not billed as panorama loads.
pub struct StreetView {
    http: reqwest::Client,
    origin: String,
    key: String,
    signer: Option<Signer>,
    source: Option<String>,
}

impl StreetView {
    pub fn new(key: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            origin: crate::DEFAULT_IMAGERY_URL.to_string(),
            key: key.into(),
            signer: None,
            source: None,
        })
    }
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            ..self
        }
    }
    pub fn with_signer(self, signer: Option<Signer>) -> Self {
        Self { signer, ..self }
    }
    /// Require the imagery copyright to mention `source`.
    pub fn with_source(self, source: Option<String>) -> Self {
        Self { source, ..self }
    }

    /// Full request URL for a candidate, signed when a secret is configured.
    pub fn url(&self, point: &GeoPoint) -> String {
        let resource = format!(
            "{}?location={}&key={}",
            METADATA_PATH,
            point.location(),
            self.key
        );
        match self.signer {
            Some(ref signer) => signer.sign(&self.origin, &resource),
            None => format!("{}{}", self.origin, resource),
        }
    }

    async fn metadata(&self, point: &GeoPoint) -> Result<Metadata, reqwest::Error> {
        self.http
            .get(self.url(point))
            .send()
            .await?
            .error_for_status()?
            .json::<Metadata>()
            .await
    }
}

#[async_trait::async_trait]
impl Oracle for StreetView {
    async fn inspect(&self, point: &GeoPoint) -> Verdict {
        match self.metadata(point).await {
            Ok(metadata) => metadata.verdict(self.source.as_deref()),
            Err(e) => Verdict::Failed(e.without_url().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> StreetView {
        StreetView::new("KEY", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn unsigned_url() {
        assert_eq!(
            oracle().url(&GeoPoint::new(28.5, 77.25)),
            "https://maps.googleapis.com/maps/api/streetview/metadata?location=28.5,77.25&key=KEY"
        );
    }
    #[test]
    fn signed_url_ends_with_signature() {
        let signer = Signer::new("vNIXE0xscrmjlyV-12Nj_BvUPaw=").unwrap();
        let resource = "/maps/api/streetview/metadata?location=28.5,77.25&key=KEY";
        let url = oracle()
            .with_origin("http://localhost:9000/")
            .with_signer(Some(signer.clone()))
            .url(&GeoPoint::new(28.5, 77.25));
        assert_eq!(
            url,
            format!(
                "http://localhost:9000{}&signature={}",
                resource,
                signer.signature(resource)
            )
        );
    }
    #[tokio::test]
    async fn unreachable_provider_fails_softly() {
        let oracle = oracle().with_origin("http://127.0.0.1:9");
        let verdict = oracle.inspect(&GeoPoint::new(0.0, 0.0)).await;
        assert!(matches!(verdict, Verdict::Failed(_)));
    }
}
