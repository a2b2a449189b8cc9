//! Search control: the wall-clock budget of one search call.

use std::time::{Duration, Instant};

/// Nodes between clock reads.
const CHECK_INTERVAL: u64 = 256;

/// Decides when a search must abort.
///
/// The clock is read every [`CHECK_INTERVAL`] nodes inside the tree and
/// unconditionally between iterations. Once the budget is exceeded the
/// control latches, so later checks return at once.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    budget: Option<Duration>,
    stopped: bool,
}

impl SearchControl {
    /// Control with a budget; the clock starts now.
    pub fn new(budget: Duration) -> Self {
        Self::starting_at(Instant::now(), Some(budget))
    }

    /// Control without a time limit.
    pub fn infinite() -> Self {
        Self::starting_at(Instant::now(), None)
    }

    /// Control whose clock started at `start`.
    pub fn starting_at(start: Instant, budget: Option<Duration>) -> Self {
        Self {
            start,
            budget,
            stopped: false,
        }
    }

    /// Check whether the search should abort, reading the clock only every
    /// [`CHECK_INTERVAL`] nodes.
    #[inline]
    pub fn should_stop(&mut self, nodes: u64) -> bool {
        if self.stopped {
            return true;
        }
        if nodes % CHECK_INTERVAL != 0 {
            return false;
        }
        self.out_of_time()
    }

    /// Read the clock and report whether the budget is spent.
    pub fn out_of_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let Some(budget) = self.budget
            && self.elapsed() >= budget
        {
            self.stopped = true;
        }
        self.stopped
    }

    /// Return `true` once the budget has been seen exhausted.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_out_of_time() {
        let mut control = SearchControl::new(Duration::ZERO);
        assert!(control.out_of_time());
        assert!(control.should_stop(1));
        assert!(control.stopped());
    }

    #[test]
    fn infinite_never_stops() {
        let mut control = SearchControl::infinite();
        assert!(!control.out_of_time());
        assert!(!control.should_stop(CHECK_INTERVAL * 10));
    }

    #[test]
    fn clock_read_only_on_interval() {
        let past = Instant::now() - Duration::from_millis(50);
        let mut control = SearchControl::starting_at(past, Some(Duration::from_millis(1)));
        assert!(!control.should_stop(CHECK_INTERVAL + 1));
        assert!(control.should_stop(CHECK_INTERVAL * 2));
    }
}
