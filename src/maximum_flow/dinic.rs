use crate::error::{Error, Result};
use crate::maximum_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;
use std::collections::VecDeque;
use tracing::{debug, trace};

const UNREACHED: usize = usize::MAX;

/// Phase-based augmenting-path solver specialized to unit capacities.
///
/// Each phase builds a BFS level graph from the source and extracts a
/// blocking flow from it; the computation ends when the sink falls out of
/// reach of the source.
#[derive(Default)]
pub struct Dinic {
    depth: Vec<usize>,
    pub num_phases: usize,
}

impl Dinic {
    /// Pushes as many unit augmenting paths as the network admits and leaves
    /// the residual capacities in their final state, from which the matched
    /// pairs can be read.
    pub fn solve<Flow>(
        &mut self,
        source: usize,
        sink: usize,
        graph: &mut ResidualGraph<Flow>,
    ) -> Result<Flow>
    where
        Flow: NumAssign + Ord + Copy,
    {
        if source >= graph.total_nodes() {
            return Err(Error::InvalidArgument(source));
        }
        if sink >= graph.total_nodes() {
            return Err(Error::InvalidArgument(sink));
        }

        self.num_phases = 0;
        let mut flow = Flow::zero();
        while self.level_graph(source, sink, graph) {
            self.num_phases += 1;
            let mut search = PhaseSearch::new(graph, &self.depth);
            let mut paths = 0usize;
            while search.find_augmenting_path(graph, source, sink) {
                for pair in search.path.windows(2) {
                    graph.push_unit(pair[0], pair[1])?;
                }
                search.path.clear();
                flow += Flow::one();
                paths += 1;
            }
            debug!(phase = self.num_phases, paths, "blocking flow extracted");
        }
        debug!(phases = self.num_phases, "sink unreachable, computation finished");

        Ok(flow)
    }

    // BFS from the source over positive residual capacity, stopping the
    // moment the sink is labeled. Returns whether the sink was reached.
    fn level_graph<Flow>(&mut self, source: usize, sink: usize, graph: &ResidualGraph<Flow>) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.depth.clear();
        self.depth.resize(graph.total_nodes(), UNREACHED);
        self.depth[source] = 0;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors(u) {
                if self.depth[v] != UNREACHED {
                    continue;
                }
                self.depth[v] = self.depth[u] + 1;
                if v == sink {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }
}

/// Working state of one phase's blocking-flow extraction: the depth labels,
/// a snapshot of the capacity matrix that dead-end pruning is allowed to
/// damage, and the path under construction. Committed paths mutate the real
/// graph; the snapshot only ever loses capacity to pruning.
struct PhaseSearch<'a, Flow> {
    depth: &'a [usize],
    phase_capacity: Vec<Vec<Flow>>,
    path: Vec<usize>,
}

impl<'a, Flow> PhaseSearch<'a, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    fn new(graph: &ResidualGraph<Flow>, depth: &'a [usize]) -> Self {
        Self {
            depth,
            phase_capacity: graph.matrix().to_vec(),
            path: Vec::new(),
        }
    }

    /// Iterative depth-first walk with explicit backtracking. On success the
    /// augmenting path, source through sink, is left in `self.path`.
    fn find_augmenting_path(
        &mut self,
        graph: &ResidualGraph<Flow>,
        source: usize,
        sink: usize,
    ) -> bool {
        let mut cursor = source;
        let mut backtracking = false;

        loop {
            if backtracking {
                backtracking = false;
            } else {
                self.path.push(cursor);
            }

            match self.next_node(graph, cursor) {
                Some(v) => {
                    cursor = v;
                    if cursor == sink {
                        self.path.push(sink);
                        trace!(path = ?self.path, "augmenting path found");
                        return true;
                    }
                }
                None if cursor == source => return false,
                None => {
                    // proven dead end; this phase must never re-enter it
                    self.prune(cursor);
                    self.path.pop();
                    match self.path.last() {
                        Some(&previous) => cursor = previous,
                        None => return false,
                    }
                    backtracking = true;
                }
            }
        }
    }

    // first neighbor, in ascending index order, that stays on the level
    // graph and still has phase capacity
    fn next_node(&self, graph: &ResidualGraph<Flow>, u: usize) -> Option<usize> {
        graph
            .neighbors(u)
            .find(|&v| self.depth[v] == self.depth[u] + 1 && self.phase_capacity[u][v] > Flow::zero())
    }

    fn prune(&mut self, node: usize) {
        for row in self.phase_capacity.iter_mut() {
            row[node] = Flow::zero();
        }
    }
}
