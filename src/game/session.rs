use super::Judgment;
use crate::Score;
use crate::geo::GeoPoint;
use std::sync::Arc;

/// Mutable-looking state of one playthrough, held as a value.
///
/// The point list is fixed at creation and shared between copies,
/// so cloning a session on every transition stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    points: Arc<[GeoPoint]>,
    index: usize,
    score: Score,
    choice: Option<Judgment>,
}

impl Default for Session {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<GeoPoint>> for Session {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self {
            points: points.into(),
            index: 0,
            score: 0,
            choice: None,
        }
    }
}

impl Session {
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn choice(&self) -> Option<Judgment> {
        self.choice
    }
    pub fn current(&self) -> Option<&GeoPoint> {
        self.points.get(self.index)
    }
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.points.len()
    }

    /// Records (or replaces) the judgment for the current point.
    pub fn choose(&self, judgment: Judgment) -> Self {
        Self {
            choice: Some(judgment),
            ..self.clone()
        }
    }

    /// Locks in the pending judgment, scores it, and moves to the next point.
    pub fn advance(&self) -> Self {
        Self {
            points: self.points.clone(),
            index: self.index + 1,
            score: self.score + self.choice.map_or(0, Judgment::points),
            choice: None,
        }
    }
}
