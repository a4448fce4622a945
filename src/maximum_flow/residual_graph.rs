use crate::error::{Error, Result};
use num_traits::NumAssign;

/// Residual network of a bipartite matching instance.
///
/// Node `0` is the injected source, nodes `1..=partition_size / 2` form the
/// left partition, nodes `partition_size / 2 + 1..=partition_size` the right
/// partition, and node `partition_size + 1` is the injected sink.
#[derive(Clone, PartialEq, Debug)]
pub struct ResidualGraph<Flow> {
    partition_size: usize,
    total_nodes: usize,
    capacity: Vec<Vec<Flow>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// `partition_size` counts the real nodes only; the source and sink are
    /// injected on top. The parsing layer guarantees it is positive and even.
    pub fn new(partition_size: usize) -> Self {
        let total_nodes = partition_size + 2;
        Self {
            partition_size,
            total_nodes,
            capacity: vec![vec![Flow::zero(); total_nodes]; total_nodes],
        }
    }

    #[inline]
    pub fn partition_size(&self) -> usize {
        self.partition_size
    }

    #[inline]
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.partition_size + 1
    }

    #[inline]
    pub fn left_nodes(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.partition_size / 2
    }

    #[inline]
    pub fn right_nodes(&self) -> std::ops::RangeInclusive<usize> {
        self.partition_size / 2 + 1..=self.partition_size
    }

    /// Sets the capacity of `u -> v` (overwrite, not additive). No reverse
    /// entry is created; the reverse residual appears only when flow is
    /// pushed.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: Flow) -> Result<()> {
        self.check_range(u)?;
        self.check_range(v)?;
        self.capacity[u][v] = capacity;
        Ok(())
    }

    /// Wires the source to every left node and every right node to the sink,
    /// all with unit capacity. Call exactly once, after every bipartite edge
    /// has been loaded.
    pub fn connect_source_and_sink(&mut self, source: usize, sink: usize) -> Result<()> {
        for u in self.left_nodes() {
            self.add_edge(source, u, Flow::one())?;
        }
        for v in self.right_nodes() {
            self.add_edge(v, sink, Flow::one())?;
        }
        Ok(())
    }

    /// Nodes reachable from `u` through positive residual capacity, in
    /// ascending index order. The order decides which augmenting path is
    /// found first, hence which matching is reported.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.total_nodes).filter(move |&v| self.capacity[u][v] > Flow::zero())
    }

    /// Moves one unit of flow across `u -> v`: the forward residual drops by
    /// one and the reverse residual grows by one, so the residual mass of
    /// the pair is conserved.
    pub fn push_unit(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_range(u)?;
        self.check_range(v)?;
        self.capacity[u][v] -= Flow::one();
        self.capacity[v][u] += Flow::one();
        Ok(())
    }

    #[inline]
    pub fn capacity(&self, u: usize, v: usize) -> Flow {
        self.capacity[u][v]
    }

    #[inline]
    pub fn matrix(&self) -> &[Vec<Flow>] {
        &self.capacity
    }

    #[inline]
    pub fn matrix_mut(&mut self) -> &mut [Vec<Flow>] {
        &mut self.capacity
    }

    #[inline]
    fn check_range(&self, node: usize) -> Result<()> {
        if node >= self.total_nodes {
            return Err(Error::OutOfRange(node));
        }
        Ok(())
    }
}
