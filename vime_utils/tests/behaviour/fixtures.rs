//! Shared fixtures for the behavioural suite.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use vime_utils::{MergeOptions, Node};

/// Documents and results shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeState {
    pub target: Slot<Node>,
    pub source: Slot<Node>,
    pub options: Slot<MergeOptions>,
    pub result: Slot<Node>,
}

/// Creates an empty state for each scenario.
#[fixture]
pub fn merge_state() -> MergeState {
    MergeState::default()
}
