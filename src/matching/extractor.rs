use crate::maximum_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;

/// Matched pairs read from a solved residual network, ordered by left node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Matching {
    pub pairs: Vec<(usize, usize)>,
}

impl Matching {
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A left node `i` is matched to a right node `j` iff one unit of flow
/// crossed `i -> j`, which leaves the reverse residual `j -> i` at one.
pub fn extract_matching<Flow>(graph: &ResidualGraph<Flow>) -> Matching
where
    Flow: NumAssign + Ord + Copy,
{
    let mut pairs = Vec::new();
    for i in graph.left_nodes() {
        for j in graph.right_nodes() {
            if graph.capacity(j, i) == Flow::one() {
                pairs.push((i, j));
            }
        }
    }
    Matching { pairs }
}
