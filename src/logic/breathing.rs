//! Guided Breathing
//!
//! 4s inhale, 4s hold, 6s exhale, repeating. `phase_at` is pure; `run`
//! drives it with tokio timers until the cycles finish or it is cancelled.

use std::future::Future;
use std::time::Duration;

pub const INHALE: Duration = Duration::from_secs(4);
pub const HOLD: Duration = Duration::from_secs(4);
pub const EXHALE: Duration = Duration::from_secs(6);
pub const CYCLE: Duration = Duration::from_secs(14);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    pub fn instruction(&self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Inhale slowly...",
            BreathingPhase::Hold => "Hold...",
            BreathingPhase::Exhale => "Exhale slowly...",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            BreathingPhase::Inhale => INHALE,
            BreathingPhase::Hold => HOLD,
            BreathingPhase::Exhale => EXHALE,
        }
    }

    fn next(&self) -> Self {
        match self {
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
        }
    }
}

/// Phase active after `elapsed` since start
pub fn phase_at(elapsed: Duration) -> BreathingPhase {
    let into_cycle = Duration::from_nanos((elapsed.as_nanos() % CYCLE.as_nanos()) as u64);

    if into_cycle < INHALE {
        BreathingPhase::Inhale
    } else if into_cycle < INHALE + HOLD {
        BreathingPhase::Hold
    } else {
        BreathingPhase::Exhale
    }
}

/// Run `cycles` full cycles, calling `on_phase` at every phase change.
///
/// Returns the number of completed cycles; fewer than requested when `stop`
/// resolves first.
pub async fn run<F, Stop>(cycles: u32, mut on_phase: F, stop: Stop) -> u32
where
    F: FnMut(BreathingPhase),
    Stop: Future<Output = ()>,
{
    tokio::pin!(stop);

    let mut completed = 0;
    let mut phase = BreathingPhase::Inhale;

    while completed < cycles {
        on_phase(phase);

        tokio::select! {
            _ = tokio::time::sleep(phase.duration()) => {}
            _ = &mut stop => {
                tracing::debug!("Breathing exercise stopped after {} cycles", completed);
                return completed;
            }
        }

        if phase == BreathingPhase::Exhale {
            completed += 1;
        }
        phase = phase.next();
    }

    completed
}
