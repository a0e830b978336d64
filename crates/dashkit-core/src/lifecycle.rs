//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Phases of a server-rendered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Request received, processing started.
    Start,
    /// View tree rendered to markup.
    Rendered,
    /// Bundle manifest loaded.
    ManifestLoaded,
    /// Final document composed.
    Composed,
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<LifecyclePhase, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record that a phase was reached.
    pub fn mark(&mut self, phase: LifecyclePhase) {
        self.marks.insert(phase, Instant::now());
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from request start to a phase, if it was reached.
    pub fn time_to(&self, phase: LifecyclePhase) -> Option<Duration> {
        if phase == LifecyclePhase::Start {
            return Some(Duration::ZERO);
        }
        self.marks.get(&phase).map(|t| t.duration_since(self.start))
    }

    /// Time spent between two phases, if both were reached in order.
    pub fn between(&self, from: LifecyclePhase, to: LifecyclePhase) -> Option<Duration> {
        let from = self.time_to(from)?;
        let to = self.time_to(to)?;
        to.checked_sub(from)
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreached_phase_has_no_timing() {
        let timing = TimingContext::new();
        assert_eq!(timing.time_to(LifecyclePhase::Start), Some(Duration::ZERO));
        assert!(timing.time_to(LifecyclePhase::Rendered).is_none());
        assert!(timing
            .between(LifecyclePhase::Start, LifecyclePhase::Composed)
            .is_none());
    }

    #[test]
    fn test_between_marks() {
        let mut timing = TimingContext::new();
        timing.mark(LifecyclePhase::Rendered);
        std::thread::sleep(Duration::from_millis(2));
        timing.mark(LifecyclePhase::ManifestLoaded);

        let manifest = timing
            .between(LifecyclePhase::Rendered, LifecyclePhase::ManifestLoaded)
            .unwrap();
        assert!(manifest >= Duration::from_millis(2));
        assert!(timing
            .between(LifecyclePhase::ManifestLoaded, LifecyclePhase::Rendered)
            .is_none());
    }
}
