use std::time::Duration;
use std::time::Instant;

/// Bounds on one acquisition.
/// Every oracle call spends one attempt, whatever its verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    pub attempts: usize,
    pub deadline: Duration,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            attempts: crate::MAX_ATTEMPTS,
            deadline: crate::ACQUISITION_DEADLINE,
        }
    }
}

impl Budget {
    pub fn new(attempts: usize, deadline: Duration) -> Self {
        Self { attempts, deadline }
    }
    pub fn start(&self) -> Meter {
        Meter {
            budget: *self,
            spent: 0,
            began: Instant::now(),
        }
    }
}

/// Why a budget stopped the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exhaustion {
    Attempts,
    Deadline,
}

/// Running tally against a [`Budget`].
#[derive(Debug)]
pub struct Meter {
    budget: Budget,
    spent: usize,
    began: Instant,
}

impl Meter {
    /// Claims one attempt, or reports which bound has run out.
    pub fn spend(&mut self) -> Result<(), Exhaustion> {
        if self.spent >= self.budget.attempts {
            return Err(Exhaustion::Attempts);
        }
        if self.elapsed() >= self.budget.deadline {
            return Err(Exhaustion::Deadline);
        }
        self.spent += 1;
        Ok(())
    }
    pub fn spent(&self) -> usize {
        self.spent
    }
    pub fn elapsed(&self) -> Duration {
        self.began.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_run_out() {
        let ref mut meter = Budget::new(3, Duration::from_secs(60)).start();
        assert!(meter.spend().is_ok());
        assert!(meter.spend().is_ok());
        assert!(meter.spend().is_ok());
        assert_eq!(meter.spend(), Err(Exhaustion::Attempts));
        assert_eq!(meter.spent(), 3);
    }
    #[test]
    fn zero_deadline_expires_immediately() {
        let ref mut meter = Budget::new(100, Duration::ZERO).start();
        assert_eq!(meter.spend(), Err(Exhaustion::Deadline));
        assert_eq!(meter.spent(), 0);
    }
}
