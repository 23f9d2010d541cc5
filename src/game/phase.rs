/// Where the player is in one playthrough.
/// Indices point into the session's point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Loading,
    Presenting(usize),
    Judged(usize),
    Ended,
}

impl Phase {
    /// Index of the point on screen, if any.
    pub fn active(&self) -> Option<usize> {
        match self {
            Self::Presenting(i) | Self::Judged(i) => Some(*i),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Loading => write!(f, "loading"),
            Self::Presenting(i) => write!(f, "presenting #{}", i),
            Self::Judged(i) => write!(f, "judged #{}", i),
            Self::Ended => write!(f, "ended"),
        }
    }
}
