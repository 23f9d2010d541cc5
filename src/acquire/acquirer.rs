use super::*;
use crate::geo::GeoPoint;
use crate::geo::Region;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// Fills a quota of viewable points by rejection sampling.
///
/// Each round picks a region uniformly, samples a coordinate inside it,
/// and asks the oracle about it. Accepted candidates keep the region's
/// name as their label. Curated points, if any, reserve part of the quota
/// and are appended unvalidated after the sampled ones.
///
/// Oracle calls are issued one at a time. The loop is bounded by a
/// [`Budget`]; running out of either attempts or time is an error rather
/// than a hang.
pub struct Acquirer {
    oracle: Arc<dyn Oracle>,
    regions: Vec<Region>,
    curated: Vec<GeoPoint>,
    target: usize,
    budget: Budget,
}

impl Acquirer {
    pub fn new(oracle: Arc<dyn Oracle>, regions: Vec<Region>) -> Self {
        Self {
            oracle,
            regions,
            curated: Vec::new(),
            target: crate::POINTS_PER_GAME,
            budget: Budget::default(),
        }
    }
    pub fn with_target(self, target: usize) -> Self {
        Self { target, ..self }
    }
    pub fn with_budget(self, budget: Budget) -> Self {
        Self { budget, ..self }
    }
    pub fn with_curated(self, curated: Vec<GeoPoint>) -> Self {
        Self { curated, ..self }
    }
    pub fn target(&self) -> usize {
        self.target
    }

    /// Number of points that must come from sampling.
    pub fn quota(&self) -> Result<usize, AcquireError> {
        let quota = self
            .target
            .checked_sub(self.curated.len())
            .ok_or(AcquireError::CuratedOverflow {
                curated: self.curated.len(),
                target: self.target,
            })?;
        match quota > 0 && self.regions.is_empty() {
            true => Err(AcquireError::NoRegions),
            false => Ok(quota),
        }
    }

    pub async fn acquire(&self) -> Result<Vec<GeoPoint>, AcquireError> {
        let ref mut rng = SmallRng::from_rng(&mut rand::rng());
        self.acquire_with(rng).await
    }

    pub async fn acquire_with<R>(&self, rng: &mut R) -> Result<Vec<GeoPoint>, AcquireError>
    where
        R: Rng + Send,
    {
        let quota = self.quota()?;
        let ref mut meter = self.budget.start();
        let mut points = Vec::with_capacity(self.target);
        while points.len() < quota {
            if let Err(why) = meter.spend() {
                return Err(self.exhausted(why, points.len(), quota, meter));
            }
            let candidate = self
                .regions
                .choose(rng)
                .ok_or(AcquireError::NoRegions)?
                .sample(rng);
            let verdict = self.oracle.inspect(&candidate).await;
            match verdict {
                Verdict::Viewable => {
                    log::debug!("accepted {}", candidate);
                    points.push(candidate);
                }
                Verdict::Failed(reason) => log::warn!("skipping {}: {}", candidate, reason),
                verdict => log::debug!("rejected {}: {}", candidate, verdict),
            }
        }
        log::info!(
            "acquired {} points in {} attempts ({:.1}s)",
            points.len(),
            meter.spent(),
            meter.elapsed().as_secs_f32()
        );
        points.extend(self.curated.iter().cloned());
        Ok(points)
    }

    fn exhausted(&self, why: Exhaustion, found: usize, target: usize, meter: &Meter) -> AcquireError {
        let error = match why {
            Exhaustion::Attempts => AcquireError::InsufficientCoverage {
                found,
                target,
                attempts: meter.spent(),
            },
            Exhaustion::Deadline => AcquireError::DeadlineExceeded {
                found,
                target,
                elapsed: meter.elapsed(),
            },
        };
        log::warn!("{}", error);
        error
    }
}
