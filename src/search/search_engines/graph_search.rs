//! Graph search over an explicit explored set, with the exploration order
//! delegated to a [`Frontier`].

use crate::search::{
    frontiers::Frontier,
    search_engines::{
        MemoryProbe, ProcessMemoryProbe, SearchOutcome, SearchResult, StatusReporter,
    },
    GoalDescription, SearchNode, SearchState,
};
use std::{collections::HashSet, time::Duration};
use tracing::{debug, info};

pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_secs(10);

/// Graph search. Each state is expanded at most once: a successor is only
/// added to the frontier if its state is neither explored nor already waiting
/// in the frontier. The first path found to a state is kept, so the plan is
/// only as good as the frontier's ordering makes it.
#[derive(Debug)]
pub struct GraphSearch {
    /// Minimum time between two periodic status logs
    status_interval: Duration,
    memory_probe: Box<dyn MemoryProbe>,
}

impl Default for GraphSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSearch {
    pub fn new() -> Self {
        Self {
            status_interval: DEFAULT_STATUS_INTERVAL,
            memory_probe: Box::new(ProcessMemoryProbe),
        }
    }

    pub fn with_status_interval(mut self, status_interval: Duration) -> Self {
        self.status_interval = status_interval;
        self
    }

    pub fn with_memory_probe(mut self, memory_probe: impl MemoryProbe + 'static) -> Self {
        self.memory_probe = Box::new(memory_probe);
        self
    }

    pub fn search<S, G>(
        &self,
        initial_state: S,
        action_set: &[Vec<S::Action>],
        goal: &G,
        frontier: &mut dyn Frontier<S>,
    ) -> SearchResult<S::Action>
    where
        S: SearchState,
        G: GoalDescription<S>,
    {
        info!("starting search");
        frontier.prepare(goal);
        let mut reporter = StatusReporter::new(self.status_interval, self.memory_probe.as_ref());
        reporter.log(0, frontier.size());

        let mut explored: HashSet<SearchNode<S>> = HashSet::new();
        let mut expanded_nodes = 0;
        frontier.add(SearchNode::root(initial_state));

        loop {
            if frontier.is_empty() {
                info!("frontier exhausted, no plan found");
                let status = reporter.finalise(expanded_nodes, 0);
                return SearchResult::new(SearchOutcome::ProvablyUnsolvable, status);
            }

            let leaf = frontier.pop();
            expanded_nodes += 1;
            debug_assert!(
                !explored.contains(leaf.state()),
                "State popped from the frontier was already explored: {:?}",
                leaf.state()
            );

            if goal.is_goal(leaf.state()) {
                debug!(
                    plan_length = leaf.depth(),
                    path_cost = leaf.path_cost(),
                    "goal reached"
                );
                let plan = leaf.extract_plan();
                let status = reporter.finalise(expanded_nodes, frontier.size());
                return SearchResult::new(SearchOutcome::Success(plan), status);
            }

            explored.insert(leaf.clone());
            let state = leaf.state();
            for joint_action in state.applicable_actions(action_set) {
                let child_state = state.result(&joint_action);
                if !explored.contains(&child_state) && !frontier.contains(&child_state) {
                    frontier.add(leaf.child(joint_action, child_state));
                }
            }

            reporter.log_if_needed(expanded_nodes, frontier.size());
        }
    }
}

/// Run [`GraphSearch`] with the default configuration.
pub fn graph_search<S, G>(
    initial_state: S,
    action_set: &[Vec<S::Action>],
    goal: &G,
    frontier: &mut dyn Frontier<S>,
) -> SearchResult<S::Action>
where
    S: SearchState,
    G: GoalDescription<S>,
{
    GraphSearch::new().search(initial_state, action_set, goal, frontier)
}
