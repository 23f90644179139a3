use crate::search::{search_engines::SearchStatus, JointAction, Plan};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<A> {
    /// The search found a plan
    Success(Plan<A>),
    /// The frontier ran empty without reaching a goal
    ProvablyUnsolvable,
}

/// The outcome of a search together with its final statistics.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    outcome: SearchOutcome<A>,
    status: SearchStatus,
}

impl<A> SearchResult<A> {
    pub fn new(outcome: SearchOutcome<A>, status: SearchStatus) -> Self {
        Self { outcome, status }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Success(_))
    }

    /// The plan found, empty if the search failed.
    pub fn plan(&self) -> &[JointAction<A>] {
        match &self.outcome {
            SearchOutcome::Success(plan) => plan.steps(),
            SearchOutcome::ProvablyUnsolvable => &[],
        }
    }

    pub fn outcome(&self) -> &SearchOutcome<A> {
        &self.outcome
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn num_generated(&self) -> usize {
        self.status.generated_nodes()
    }

    pub fn num_expanded(&self) -> usize {
        self.status.expanded_nodes()
    }

    pub fn elapsed(&self) -> Duration {
        self.status.elapsed()
    }

    pub fn into_outcome(self) -> SearchOutcome<A> {
        self.outcome
    }
}
