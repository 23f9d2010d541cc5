use crate::game::Supplier;
use crate::geo::GeoPoint;

/// Route served by the point supplier.
pub const POINTS_ENDPOINT: &str = "/api/points";

/// Fetches points from the server over HTTP.
pub struct Remote {
    url: String,
}

impl Default for Remote {
    fn default() -> Self {
        Self::new(POINTS_ENDPOINT)
    }
}

impl Remote {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl Supplier for Remote {
    async fn fetch(&self) -> anyhow::Result<Vec<GeoPoint>> {
        let response = gloo_net::http::Request::get(&self.url).send().await?;
        if !response.ok() {
            anyhow::bail!(
                "{} answered {} {}",
                self.url,
                response.status(),
                response.status_text()
            );
        }
        Ok(response.json::<Vec<GeoPoint>>().await?)
    }
}
