// src/breathing.rs
//! Guided breathing: In -> Hold -> Out, repeating.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    In,
    Hold,
    Out,
}

impl BreathPhase {
    pub fn label(&self) -> &'static str {
        match self {
            BreathPhase::In => "In",
            BreathPhase::Hold => "Hold",
            BreathPhase::Out => "Out",
        }
    }

    pub fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::In => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Out,
            BreathPhase::Out => BreathPhase::In,
        }
    }
}

/// Phase lengths for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingPattern {
    pub inhale: Duration,
    pub hold: Duration,
    pub exhale: Duration,
}

impl Default for BreathingPattern {
    fn default() -> Self {
        Self {
            inhale: Duration::from_secs(4),
            hold: Duration::from_secs(4),
            exhale: Duration::from_secs(6),
        }
    }
}

impl BreathingPattern {
    pub fn duration_of(&self, phase: BreathPhase) -> Duration {
        match phase {
            BreathPhase::In => self.inhale,
            BreathPhase::Hold => self.hold,
            BreathPhase::Out => self.exhale,
        }
    }

    pub fn cycle(&self) -> Duration {
        self.inhale + self.hold + self.exhale
    }

    /// Phase at `elapsed` since the exercise started
    pub fn phase_at(&self, elapsed: Duration) -> BreathPhase {
        let cycle = self.cycle();
        if cycle.is_zero() {
            return BreathPhase::In;
        }

        let offset = Duration::from_nanos((elapsed.as_nanos() % cycle.as_nanos()) as u64);
        if offset < self.inhale {
            BreathPhase::In
        } else if offset < self.inhale + self.hold {
            BreathPhase::Hold
        } else {
            BreathPhase::Out
        }
    }

    /// Run `cycles` full cycles, calling `on_phase` as each phase begins
    pub async fn run<F>(&self, cycles: u32, mut on_phase: F)
    where
        F: FnMut(u32, BreathPhase),
    {
        for cycle in 0..cycles {
            let mut phase = BreathPhase::In;
            loop {
                on_phase(cycle, phase);
                tokio::time::sleep(self.duration_of(phase)).await;
                phase = phase.next();
                if phase == BreathPhase::In {
                    break;
                }
            }
        }
    }
}
