/// Messages surfaced to the player when a game cannot start.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The supplier answered with no points.
    NoLocations,
    /// The request or its decoding failed.
    FetchFailed(String),
}

impl Alert {
    /// Player-facing text. The failure reason stays in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoLocations => "No locations available. Please try again later.",
            Self::FetchFailed(_) => "Error starting the game. Please try again later.",
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLocations => write!(f, "no locations received"),
            Self::FetchFailed(reason) => write!(f, "failed to fetch locations: {}", reason),
        }
    }
}
