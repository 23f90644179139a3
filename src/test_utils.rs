use crate::search::{
    frontiers::{DepthFirstFrontier, Frontier},
    search_engines::MemoryProbe,
    GoalDescription, JointAction, SearchNode, SearchState,
};
use smallvec::smallvec;
use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

pub const CORRIDOR_LEVEL_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/corridor.lvl"));

pub const CORRIDOR_SWAP_LEVEL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/levels/corridor_swap.lvl"
));

pub const RING_SWAP_LEVEL_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/levels/ring_swap.lvl"));

/// A directed graph with labelled edges, searched by a single agent whose
/// actions are the edge labels.
#[derive(Debug, Default)]
pub struct TestGraph {
    edges: BTreeMap<u32, Vec<(char, u32)>>,
    labels: Vec<char>,
}

impl TestGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(mut self, from: u32, label: char, to: u32) -> Self {
        self.edges.entry(from).or_default().push((label, to));
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    pub fn state(self: &Rc<Self>, node: u32) -> GraphState {
        GraphState {
            node,
            graph: Rc::clone(self),
        }
    }

    pub fn goal(&self, node: u32) -> GraphGoal {
        GraphGoal { node }
    }

    /// Every label, in the order first used.
    pub fn action_set(&self) -> Vec<Vec<char>> {
        vec![self.labels.clone()]
    }

    fn successor(&self, node: u32, label: char) -> Option<u32> {
        self.edges
            .get(&node)?
            .iter()
            .find(|(edge_label, _)| *edge_label == label)
            .map(|&(_, to)| to)
    }
}

/// Nodes `0..=n`, `r` moves right and `l` moves left.
pub fn line_graph(n: u32) -> Rc<TestGraph> {
    let mut graph = TestGraph::new();
    for i in 0..n {
        graph = graph.edge(i, 'r', i + 1).edge(i + 1, 'l', i);
    }
    Rc::new(graph)
}

/// `0 -a-> 1 -b-> 2`, with `c` leading from 1 back to 0.
pub fn two_step_graph() -> Rc<TestGraph> {
    Rc::new(
        TestGraph::new()
            .edge(0, 'a', 1)
            .edge(1, 'b', 2)
            .edge(1, 'c', 0),
    )
}

/// Two paths from 0 to 3: `a` then `c` through 1, `b` then `d` through 2.
pub fn diamond_graph() -> Rc<TestGraph> {
    Rc::new(
        TestGraph::new()
            .edge(0, 'a', 1)
            .edge(0, 'b', 2)
            .edge(1, 'c', 3)
            .edge(2, 'd', 3),
    )
}

/// A cycle `0 -> 1 -> 2 -> 3 -> 0` over `r`, back edges over `l` and a self
/// loop `s` on 0.
pub fn cyclic_graph() -> Rc<TestGraph> {
    Rc::new(
        TestGraph::new()
            .edge(0, 's', 0)
            .edge(0, 'r', 1)
            .edge(1, 'r', 2)
            .edge(2, 'r', 3)
            .edge(3, 'r', 0)
            .edge(2, 'l', 1)
            .edge(1, 'l', 0),
    )
}

#[derive(Clone)]
pub struct GraphState {
    pub node: u32,
    graph: Rc<TestGraph>,
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for GraphState {}

impl Hash for GraphState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl fmt::Debug for GraphState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphState({})", self.node)
    }
}

impl SearchState for GraphState {
    type Action = char;

    fn applicable_actions(&self, action_set: &[Vec<char>]) -> Vec<JointAction<char>> {
        action_set[0]
            .iter()
            .filter(|&&label| self.graph.successor(self.node, label).is_some())
            .map(|&label| smallvec![label])
            .collect()
    }

    fn result(&self, joint_action: &JointAction<char>) -> Self {
        let node = self
            .graph
            .successor(self.node, joint_action[0])
            .expect("Edge not in graph");
        self.graph.state(node)
    }
}

#[derive(Debug)]
pub struct GraphGoal {
    node: u32,
}

impl GoalDescription<GraphState> for GraphGoal {
    fn is_goal(&self, state: &GraphState) -> bool {
        state.node == self.node
    }
}

/// A depth-first frontier that records every node added and popped. Panics if
/// the same state is ever added twice in one search.
#[derive(Debug, Default)]
pub struct RecordingFrontier {
    inner: DepthFirstFrontier<GraphState>,
    added: Vec<u32>,
    popped: Vec<u32>,
}

impl RecordingFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn added(&self) -> &[u32] {
        &self.added
    }

    pub fn popped(&self) -> &[u32] {
        &self.popped
    }
}

impl Frontier<GraphState> for RecordingFrontier {
    fn prepare(&mut self, goal: &dyn GoalDescription<GraphState>) {
        self.inner.prepare(goal);
        self.added.clear();
        self.popped.clear();
    }

    fn add(&mut self, node: SearchNode<GraphState>) {
        let state = node.state().node;
        assert!(
            !self.added.contains(&state),
            "State {} added to the frontier twice",
            state
        );
        self.added.push(state);
        self.inner.add(node);
    }

    fn pop(&mut self) -> SearchNode<GraphState> {
        let node = self.inner.pop();
        self.popped.push(node.state().node);
        node
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn contains(&self, state: &GraphState) -> bool {
        self.inner.contains(state)
    }
}

/// Always reports the same memory usage.
#[derive(Debug, Clone, Copy)]
pub struct FixedMemoryProbe {
    bytes: u64,
}

impl FixedMemoryProbe {
    pub fn new(bytes: u64) -> Self {
        Self { bytes }
    }
}

impl MemoryProbe for FixedMemoryProbe {
    fn usage_bytes(&self) -> Option<u64> {
        Some(self.bytes)
    }
}
