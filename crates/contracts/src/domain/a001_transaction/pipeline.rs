//! Position of an order on the fixed five-stage laundry pipeline
//!
//! The position drives the step indicator and the progress bar on the tracking
//! and transaction detail pages.

use super::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Progress bar width for each pipeline position, in percent.
///
/// Intentionally non-linear: the first stage already shows visible progress and
/// only the terminal stage reaches 100.
pub const PROGRESS_BREAKPOINTS: [u8; 5] = [7, 25, 50, 72, 100];

/// Visual state of a single step in the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl StepState {
    /// CSS class applied to the step element, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            StepState::Completed => Some("completed"),
            StepState::Active => Some("active"),
            StepState::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepView {
    pub stage: OrderStatus,
    pub state: StepState,
}

/// Everything the pipeline widgets need for one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineView {
    pub current: OrderStatus,
    pub position: usize,
    pub percent: u8,
    pub steps: Vec<StepView>,
}

impl OrderStatus {
    /// Zero-based index in [`OrderStatus::PIPELINE`]
    pub fn position(&self) -> usize {
        match self {
            OrderStatus::Queued => 0,
            OrderStatus::Washing => 1,
            OrderStatus::Ironing => 2,
            OrderStatus::ReadyToPickUp => 3,
            OrderStatus::Complete => 4,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        PROGRESS_BREAKPOINTS[self.position()]
    }
}

/// Step states for every stage relative to `current`
pub fn step_states(current: OrderStatus) -> Vec<StepView> {
    let current_pos = current.position();
    OrderStatus::PIPELINE
        .iter()
        .map(|stage| {
            let state = match stage.position().cmp(&current_pos) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Active,
                std::cmp::Ordering::Greater => StepState::Pending,
            };
            StepView {
                stage: *stage,
                state,
            }
        })
        .collect()
}

impl PipelineView {
    pub fn for_status(current: OrderStatus) -> Self {
        Self {
            current,
            position: current.position(),
            percent: current.progress_percent(),
            steps: step_states(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_strictly_increasing() {
        let positions: Vec<usize> = OrderStatus::PIPELINE.iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_position_after_normalize() {
        for raw in ["queued", "WASHING", "ironing", "ready to pick up", "completed"] {
            let pos = OrderStatus::normalize(raw).unwrap().position();
            assert!(pos <= 4);
        }
    }

    #[test]
    fn test_progress_breakpoints() {
        assert_eq!(OrderStatus::Queued.progress_percent(), 7);
        assert_eq!(OrderStatus::Washing.progress_percent(), 25);
        assert_eq!(OrderStatus::Ironing.progress_percent(), 50);
        assert_eq!(OrderStatus::ReadyToPickUp.progress_percent(), 72);
        assert_eq!(OrderStatus::Complete.progress_percent(), 100);

        let percents: Vec<u8> = OrderStatus::PIPELINE
            .iter()
            .map(|s| s.progress_percent())
            .collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_step_states_for_middle_stage() {
        let states: Vec<StepState> = step_states(OrderStatus::Ironing)
            .into_iter()
            .map(|s| s.state)
            .collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
                StepState::Pending,
                StepState::Pending,
            ]
        );
    }

    #[test]
    fn test_step_states_edges() {
        let first = step_states(OrderStatus::Queued);
        assert_eq!(first[0].state, StepState::Active);
        assert!(first[1..].iter().all(|s| s.state == StepState::Pending));

        let last = step_states(OrderStatus::Complete);
        assert_eq!(last[4].state, StepState::Active);
        assert!(last[..4].iter().all(|s| s.state == StepState::Completed));
    }

    #[test]
    fn test_pipeline_view() {
        let view = PipelineView::for_status(OrderStatus::ReadyToPickUp);
        assert_eq!(view.position, 3);
        assert_eq!(view.percent, 72);
        assert_eq!(view.steps.len(), 5);
        assert_eq!(view.steps[3].stage, OrderStatus::ReadyToPickUp);
    }
}
