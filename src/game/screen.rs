use super::*;
use crate::geo::GeoPoint;

const START_LABEL: &str = "START GAME";
const LOADING_LABEL: &str = "Loading...";

/// Look of a judgment button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing chosen yet.
    Idle,
    /// This is the current choice.
    Selected,
    /// The other button is the current choice.
    Dimmed,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Self::Idle => "#ff6600",
            Self::Selected => "#999",
            Self::Dimmed => "#444",
        }
    }
    fn of(button: Judgment, choice: Option<Judgment>) -> Self {
        match choice {
            None => Self::Idle,
            Some(chosen) if chosen == button => Self::Selected,
            Some(_) => Self::Dimmed,
        }
    }
}

/// The start button.
#[derive(Debug, Clone, PartialEq)]
pub struct Launcher {
    pub visible: bool,
    pub enabled: bool,
    pub label: &'static str,
}

/// Everything a renderer needs to draw a [`Game`], and nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub start: Launcher,
    /// Map and judgment controls shown.
    pub playing: bool,
    pub panorama: Option<GeoPoint>,
    pub positive: Tone,
    pub negative: Tone,
    pub proceed: bool,
    pub score: String,
    /// `current / total`, while playing.
    pub progress: Option<String>,
    /// Final score, once the game has ended.
    pub summary: Option<String>,
    pub alert: Option<&'static str>,
}

impl From<&Game> for Screen {
    fn from(game: &Game) -> Self {
        let phase = game.phase();
        let session = game.session();
        let choice = match phase {
            Phase::Judged(_) => session.choice(),
            _ => None,
        };
        Self {
            start: Launcher {
                visible: matches!(phase, Phase::NotStarted | Phase::Loading),
                enabled: phase == Phase::NotStarted,
                label: match phase {
                    Phase::Loading => LOADING_LABEL,
                    _ => START_LABEL,
                },
            },
            playing: phase.active().is_some(),
            panorama: game.active().cloned(),
            positive: Tone::of(Judgment::Positive, choice),
            negative: Tone::of(Judgment::Negative, choice),
            proceed: matches!(phase, Phase::Judged(_)),
            score: session.score().to_string(),
            progress: phase
                .active()
                .map(|i| format!("{} / {}", i + 1, session.len())),
            summary: match phase {
                Phase::Ended => Some(session.score().to_string()),
                _ => None,
            },
            alert: game.alert().map(Alert::message),
        }
    }
}
