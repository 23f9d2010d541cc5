use super::*;
use crate::geo::GeoPoint;

/// Raised when an input makes no sense in the current phase,
/// such as proceeding before a judgment was made.
#[derive(Debug, Clone, PartialEq)]
pub struct IllegalTransition {
    pub phase: Phase,
    pub input: String,
}

impl std::fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot {} while {}", self.input, self.phase)
    }
}

impl std::error::Error for IllegalTransition {}

/// One playthrough: phase, session data, and any pending alert.
///
/// Transitions never mutate; each returns the next game or an
/// [`IllegalTransition`], leaving the caller's value as it was.
///
/// Score only moves on [`Input::Proceed`], and only the point at
/// [`Phase::active`] is ever awaiting a judgment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Game {
    phase: Phase,
    session: Session,
    alert: Option<Alert>,
}

impl Game {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }
    /// The point on screen, if a panorama is showing.
    pub fn active(&self) -> Option<&GeoPoint> {
        self.phase.active().and_then(|i| self.session.points().get(i))
    }
    /// Position and point of the panorama on screen. Changes only when a
    /// new point is presented, so it keys repositioning the viewer.
    pub fn scene(&self) -> Option<(usize, GeoPoint)> {
        self.phase.active().zip(self.active().cloned())
    }

    pub fn apply(&self, input: Input) -> Result<Self, IllegalTransition> {
        match (self.phase, input) {
            (Phase::NotStarted, Input::Start) => Ok(Self {
                phase: Phase::Loading,
                ..Self::default()
            }),
            (Phase::Loading, Input::Loaded(points)) if points.is_empty() => {
                log::warn!("{}", Alert::NoLocations);
                Ok(Self::alerted(Alert::NoLocations))
            }
            (Phase::Loading, Input::Loaded(points)) => {
                log::info!("starting game with {} points", points.len());
                Ok(Self {
                    phase: Phase::Presenting(0),
                    session: Session::from(points),
                    alert: None,
                })
            }
            (Phase::Loading, Input::Failed(reason)) => {
                let alert = Alert::FetchFailed(reason);
                log::error!("{}", alert);
                Ok(Self::alerted(alert))
            }
            (Phase::Presenting(i) | Phase::Judged(i), Input::Choose(judgment)) => Ok(Self {
                phase: Phase::Judged(i),
                session: self.session.choose(judgment),
                alert: None,
            }),
            (Phase::Judged(_), Input::Proceed) => {
                let session = self.session.advance();
                let phase = match session.is_exhausted() {
                    true => Phase::Ended,
                    false => Phase::Presenting(session.index()),
                };
                Ok(Self {
                    phase,
                    session,
                    alert: None,
                })
            }
            (Phase::Ended, Input::Restart) => Ok(Self::default()),
            (phase, input) => Err(IllegalTransition {
                phase,
                input: input.to_string(),
            }),
        }
    }

    pub fn start(&self) -> Result<Self, IllegalTransition> {
        self.apply(Input::Start)
    }
    pub fn load(&self, fetched: anyhow::Result<Vec<GeoPoint>>) -> Result<Self, IllegalTransition> {
        match fetched {
            Ok(points) => self.apply(Input::Loaded(points)),
            Err(e) => self.apply(Input::Failed(format!("{:#}", e))),
        }
    }
    pub fn choose(&self, judgment: Judgment) -> Result<Self, IllegalTransition> {
        self.apply(Input::Choose(judgment))
    }
    pub fn proceed(&self) -> Result<Self, IllegalTransition> {
        self.apply(Input::Proceed)
    }
    pub fn restart(&self) -> Result<Self, IllegalTransition> {
        self.apply(Input::Restart)
    }

    /// Start, fetch from the supplier, and load the result.
    pub async fn launch<S>(&self, supplier: &S) -> Result<Self, IllegalTransition>
    where
        S: Supplier + ?Sized,
    {
        let loading = self.start()?;
        loading.load(supplier.fetch().await)
    }

    fn alerted(alert: Alert) -> Self {
        Self {
            alert: Some(alert),
            ..Self::default()
        }
    }
}
