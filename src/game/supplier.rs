use crate::geo::GeoPoint;

/// Source of the points for one game.
/// Browser fetches are not `Send`, so neither is this trait.
#[async_trait::async_trait(?Send)]
pub trait Supplier {
    async fn fetch(&self) -> anyhow::Result<Vec<GeoPoint>>;
}
