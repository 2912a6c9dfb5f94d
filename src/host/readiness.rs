//! Bounded waiting for host dependencies (containers, payload elements).
//!
//! `ReadinessPoll` is a tick-driven state machine that an event loop can drive
//! from its own timer; `await_condition` drives it synchronously through a
//! [`Sleeper`]. Both stop probing once the dependency is attached, the budget
//! runs out, or the poll is cancelled.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{SyncError, SyncResult};

/// Probe cadence and upper bound for a readiness poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollBudget {
    pub interval_ms: u64,
    pub max_attempts: u32,
}

impl Default for PollBudget {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            max_attempts: 50,
        }
    }
}

impl PollBudget {
    #[must_use]
    pub fn new(interval_ms: u64, max_attempts: u32) -> Self {
        Self {
            interval_ms,
            max_attempts,
        }
    }

    pub fn validate(self) -> SyncResult<Self> {
        if self.max_attempts == 0 {
            return Err(SyncError::InvalidData(
                "readiness poll needs at least one attempt".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Result of a single poll tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PollStatus<T> {
    /// Dependency still missing; `attempt` probes have run so far.
    Pending { attempt: u32 },
    /// Dependency found on this tick. Returned exactly once.
    Attached(T),
    TimedOut { attempts: u32 },
    Cancelled,
    /// The dependency was attached on an earlier tick.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Attached,
    TimedOut,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ReadinessPoll {
    dependency: &'static str,
    budget: PollBudget,
    attempts: u32,
    phase: Phase,
}

impl ReadinessPoll {
    #[must_use]
    pub fn new(dependency: &'static str, budget: PollBudget) -> Self {
        Self {
            dependency,
            budget,
            attempts: 0,
            phase: Phase::Waiting,
        }
    }

    #[must_use]
    pub fn dependency(&self) -> &'static str {
        self.dependency
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// `true` once no further probes will run.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Waiting
    }

    /// Stops probing. No effect on a poll that already settled.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Waiting {
            debug!(dependency = self.dependency, "readiness poll cancelled");
            self.phase = Phase::Cancelled;
        }
    }

    /// Runs `probe` once, unless the poll has already settled.
    pub fn tick<T>(&mut self, probe: impl FnOnce() -> Option<T>) -> PollStatus<T> {
        match self.phase {
            Phase::Waiting => {}
            Phase::Attached => return PollStatus::Settled,
            Phase::TimedOut => {
                return PollStatus::TimedOut {
                    attempts: self.attempts,
                };
            }
            Phase::Cancelled => return PollStatus::Cancelled,
        }

        self.attempts += 1;
        if let Some(value) = probe() {
            debug!(
                dependency = self.dependency,
                attempts = self.attempts,
                "dependency attached"
            );
            self.phase = Phase::Attached;
            return PollStatus::Attached(value);
        }

        if self.attempts >= self.budget.max_attempts {
            warn!(
                dependency = self.dependency,
                attempts = self.attempts,
                "dependency not found within poll budget"
            );
            self.phase = Phase::TimedOut;
            return PollStatus::TimedOut {
                attempts: self.attempts,
            };
        }

        trace!(
            dependency = self.dependency,
            attempt = self.attempts,
            "waiting for dependency"
        );
        PollStatus::Pending {
            attempt: self.attempts,
        }
    }
}

/// Waits between readiness probes.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

impl<F: FnMut(Duration)> Sleeper for F {
    fn sleep(&mut self, duration: Duration) {
        self(duration);
    }
}

/// Probes until `probe` yields a value or the budget is exhausted.
///
/// Sleeps `budget.interval()` between probes, never after the last one.
pub fn await_condition<T>(
    dependency: &'static str,
    budget: PollBudget,
    sleeper: &mut impl Sleeper,
    mut probe: impl FnMut() -> Option<T>,
) -> SyncResult<T> {
    let budget = budget.validate()?;
    let mut poll = ReadinessPoll::new(dependency, budget);
    loop {
        match poll.tick(&mut probe) {
            PollStatus::Pending { .. } => sleeper.sleep(budget.interval()),
            PollStatus::Attached(value) => return Ok(value),
            PollStatus::TimedOut { .. } | PollStatus::Cancelled | PollStatus::Settled => {
                return Err(SyncError::DependencyTimeout {
                    dependency,
                    attempts: poll.attempts(),
                });
            }
        }
    }
}
