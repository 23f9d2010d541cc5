use crate::geo::GeoPoint;

/// Outcome of asking the imagery provider about one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Imagery exists and satisfies any provenance requirement.
    Viewable,
    /// Provider answered with a non-OK status such as ZERO_RESULTS.
    Unavailable(String),
    /// Imagery exists but its copyright does not match the required source.
    Foreign(String),
    /// Transport or decoding failure. Treated like any other rejection.
    Failed(String),
}

impl Verdict {
    pub fn is_viewable(&self) -> bool {
        matches!(self, Self::Viewable)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewable => write!(f, "viewable"),
            Self::Unavailable(status) => write!(f, "unavailable ({})", status),
            Self::Foreign(copyright) => write!(f, "foreign imagery ({})", copyright),
            Self::Failed(reason) => write!(f, "oracle failed: {}", reason),
        }
    }
}

/// Decides whether a candidate point can be shown as a panorama.
///
/// Implementations never return errors: anything that goes wrong while
/// asking is folded into [`Verdict::Failed`] so the sampling loop can move
/// on to the next candidate.
#[async_trait::async_trait]
pub trait Oracle: Send + Sync {
    async fn inspect(&self, point: &GeoPoint) -> Verdict;
}
