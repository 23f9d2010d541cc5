use std::time::Duration;

/// Ways an acquisition can fail to fill its quota.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquireError {
    /// Attempt cap reached before enough candidates passed the oracle.
    InsufficientCoverage {
        found: usize,
        target: usize,
        attempts: usize,
    },
    /// Deadline passed before enough candidates passed the oracle.
    DeadlineExceeded {
        found: usize,
        target: usize,
        elapsed: Duration,
    },
    /// Nothing to sample from while sampled points are still required.
    NoRegions,
    /// More curated points than the quota allows.
    CuratedOverflow { curated: usize, target: usize },
}

impl std::fmt::Display for AcquireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientCoverage {
                found,
                target,
                attempts,
            } => write!(
                f,
                "insufficient coverage: {}/{} viewable points after {} attempts",
                found, target, attempts
            ),
            Self::DeadlineExceeded {
                found,
                target,
                elapsed,
            } => write!(
                f,
                "deadline exceeded: {}/{} viewable points after {:.1}s",
                found,
                target,
                elapsed.as_secs_f32()
            ),
            Self::NoRegions => write!(f, "no regions configured for sampling"),
            Self::CuratedOverflow { curated, target } => write!(
                f,
                "{} curated points exceed the quota of {}",
                curated, target
            ),
        }
    }
}

impl std::error::Error for AcquireError {}
