//! Deterministic state machine behind the pipeline showcase.
//!
//! The run is an explicit FSM advanced by its caller one step at a
//! time, so the UI layer owns pacing and tests stay synchronous. An
//! errored run has no retry path; it can only be reset and re-run.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    Extract,
    Transform,
    Load,
    Analyze,
}

impl PipelineStage {
    pub const fn ordered() -> [Self; 4] {
        [Self::Extract, Self::Transform, Self::Load, Self::Analyze]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Extract => "Extract",
            Self::Transform => "Transform",
            Self::Load => "Load",
            Self::Analyze => "Analyze",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Extract => "Extract data from multiple source systems",
            Self::Transform => "Clean, normalize, and transform data",
            Self::Load => "Load processed data into target systems",
            Self::Analyze => "Generate insights from processed data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Idle,
    Running,
    Complete,
    Error,
}

/// Overall run status derived from the stage states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running(PipelineStage),
    Complete,
    Failed(PipelineStage),
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    states: [StageState; 4],
    fault: Option<PipelineStage>,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self {
            states: [StageState::Idle; 4],
            fault: None,
        }
    }

    /// A run that will fail when the given stage executes.
    pub fn with_fault(stage: PipelineStage) -> Self {
        Self {
            states: [StageState::Idle; 4],
            fault: Some(stage),
        }
    }

    pub fn status(&self) -> RunStatus {
        let stages = PipelineStage::ordered();
        for (stage, state) in stages.iter().zip(self.states.iter()) {
            match state {
                StageState::Running => return RunStatus::Running(*stage),
                StageState::Error => return RunStatus::Failed(*stage),
                StageState::Idle | StageState::Complete => {}
            }
        }
        if self.states == [StageState::Complete; 4] {
            RunStatus::Complete
        } else {
            RunStatus::Idle
        }
    }

    pub fn stages(&self) -> [(PipelineStage, StageState); 4] {
        let ordered = PipelineStage::ordered();
        [
            (ordered[0], self.states[0]),
            (ordered[1], self.states[1]),
            (ordered[2], self.states[2]),
            (ordered[3], self.states[3]),
        ]
    }

    /// Advance the run by one transition and return the new status.
    /// Completed and failed runs stay where they are.
    pub fn advance(&mut self) -> RunStatus {
        match self.status() {
            RunStatus::Idle if self.states[0] == StageState::Idle => {
                self.states[0] = StageState::Running;
            }
            RunStatus::Running(stage) => {
                let index = PipelineStage::ordered()
                    .iter()
                    .position(|candidate| *candidate == stage)
                    .unwrap_or(0);
                if self.fault == Some(stage) {
                    self.states[index] = StageState::Error;
                } else {
                    self.states[index] = StageState::Complete;
                    if index + 1 < self.states.len() {
                        self.states[index + 1] = StageState::Running;
                    }
                }
            }
            RunStatus::Idle | RunStatus::Complete | RunStatus::Failed(_) => {}
        }
        self.status()
    }

    /// Return every stage to idle; the configured fault is kept so a
    /// reset run reproduces the same failure.
    pub fn reset(&mut self) {
        self.states = [StageState::Idle; 4];
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_advances_through_all_stages() {
        let mut run = PipelineRun::new();
        assert_eq!(run.status(), RunStatus::Idle);

        assert_eq!(run.advance(), RunStatus::Running(PipelineStage::Extract));
        assert_eq!(run.advance(), RunStatus::Running(PipelineStage::Transform));
        assert_eq!(run.advance(), RunStatus::Running(PipelineStage::Load));
        assert_eq!(run.advance(), RunStatus::Running(PipelineStage::Analyze));
        assert_eq!(run.advance(), RunStatus::Complete);

        // Further steps are no-ops.
        assert_eq!(run.advance(), RunStatus::Complete);
    }

    #[test]
    fn fault_halts_the_run_at_the_failing_stage() {
        let mut run = PipelineRun::with_fault(PipelineStage::Load);
        run.advance(); // extract running
        run.advance(); // transform running
        run.advance(); // load running
        assert_eq!(run.advance(), RunStatus::Failed(PipelineStage::Load));
        assert_eq!(run.advance(), RunStatus::Failed(PipelineStage::Load));

        let stages = run.stages();
        assert_eq!(stages[1].1, StageState::Complete);
        assert_eq!(stages[2].1, StageState::Error);
        assert_eq!(stages[3].1, StageState::Idle);
    }

    #[test]
    fn reset_restarts_from_idle_and_keeps_the_fault() {
        let mut run = PipelineRun::with_fault(PipelineStage::Extract);
        run.advance();
        assert_eq!(run.advance(), RunStatus::Failed(PipelineStage::Extract));

        run.reset();
        assert_eq!(run.status(), RunStatus::Idle);
        run.advance();
        assert_eq!(run.advance(), RunStatus::Failed(PipelineStage::Extract));
    }
}
