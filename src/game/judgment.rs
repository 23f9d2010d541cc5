use crate::Score;

/// The player's call on the panorama in front of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    /// Litter spotted.
    Positive,
    /// Street looks clean.
    Negative,
}

impl Judgment {
    /// Points earned when this judgment is locked in.
    pub fn points(self) -> Score {
        match self {
            Self::Positive => 1,
            Self::Negative => 0,
        }
    }
}

impl std::fmt::Display for Judgment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "yes"),
            Self::Negative => write!(f, "no"),
        }
    }
}
