use super::Judgment;
use crate::geo::GeoPoint;

/// Everything that can happen to a game.
/// Player actions plus the outcome of the one asynchronous fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Start,
    Loaded(Vec<GeoPoint>),
    Failed(String),
    Choose(Judgment),
    Proceed,
    Restart,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Loaded(points) => write!(f, "load {} points", points.len()),
            Self::Failed(_) => write!(f, "fail loading"),
            Self::Choose(judgment) => write!(f, "choose {}", judgment),
            Self::Proceed => write!(f, "proceed"),
            Self::Restart => write!(f, "restart"),
        }
    }
}
