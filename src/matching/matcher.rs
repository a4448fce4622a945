use crate::error::Result;
use crate::matching::extractor::{extract_matching, Matching};
use crate::matching::instance::MatchingInstance;
use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::residual_graph::ResidualGraph;
use std::path::Path;
use tracing::info;

/// End-to-end solver: parses an instance, reduces it to a unit-capacity flow
/// network, runs the phase-based engine and reads the maximum matching back
/// out of the residual state.
pub struct BipartiteMatcher {
    instance: MatchingInstance,
    graph: ResidualGraph<i32>,
}

impl BipartiteMatcher {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_instance(MatchingInstance::from_path(path)?)
    }

    /// Builds the flow network and wires the source and sink. The wiring
    /// happens exactly once, here, so `solve` can be called repeatedly.
    pub fn from_instance(instance: MatchingInstance) -> Result<Self> {
        let mut graph: ResidualGraph<i32> = instance.build_graph()?;
        let (source, sink) = (graph.source(), graph.sink());
        graph.connect_source_and_sink(source, sink)?;
        Ok(Self { instance, graph })
    }

    pub fn solve(&mut self) -> Result<Matching> {
        let (source, sink) = (self.graph.source(), self.graph.sink());
        let mut engine = Dinic::default();
        engine.solve(source, sink, &mut self.graph)?;
        let matching = extract_matching(&self.graph);
        info!(
            matches = matching.len(),
            phases = engine.num_phases,
            "matching computed"
        );
        Ok(matching)
    }

    #[inline]
    pub fn instance(&self) -> &MatchingInstance {
        &self.instance
    }

    #[inline]
    pub fn graph(&self) -> &ResidualGraph<i32> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "4\nA\nB\nX\nY\n3\n1 3\n2 3\n2 4\n";

    #[test]
    fn solves_the_worked_example() {
        let instance = MatchingInstance::parse(EXAMPLE).unwrap();
        let mut matcher = BipartiteMatcher::from_instance(instance).unwrap();
        let matching = matcher.solve().unwrap();
        assert_eq!(matching.pairs, vec![(1, 3), (2, 4)]);

        let names: Vec<(&str, &str)> = matching
            .pairs
            .iter()
            .map(|&(left, right)| (matcher.instance().name(left), matcher.instance().name(right)))
            .collect();
        assert_eq!(names, vec![("A", "X"), ("B", "Y")]);
    }

    #[test]
    fn solving_twice_reports_the_same_matching() {
        let instance = MatchingInstance::parse(EXAMPLE).unwrap();
        let mut matcher = BipartiteMatcher::from_instance(instance).unwrap();
        let first = matcher.solve().unwrap();
        let second = matcher.solve().unwrap();
        assert_eq!(first, second);
    }
}
