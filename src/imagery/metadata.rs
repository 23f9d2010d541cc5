use crate::acquire::Verdict;
use serde::Deserialize;

/// Status the metadata endpoint reports when a panorama exists.
pub const STATUS_OK: &str = "OK";

/// The parts of a Street View metadata response that decide a verdict.
/// `copyright` only accompanies `OK`; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metadata {
    pub status: String,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl Metadata {
    /// Classifies the response, optionally insisting the imagery
    /// credits `source` in its copyright line.
    pub fn verdict(&self, source: Option<&str>) -> Verdict {
        if self.status != STATUS_OK {
            return Verdict::Unavailable(self.status.clone());
        }
        match (source, self.copyright.as_deref()) {
            (None, _) => Verdict::Viewable,
            (Some(source), Some(copyright)) if copyright.contains(source) => Verdict::Viewable,
            (Some(_), copyright) => Verdict::Foreign(copyright.unwrap_or_default().to_string()),
        }
    }
}
