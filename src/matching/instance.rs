use crate::error::{Error, Result};
use crate::maximum_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A parsed bipartite matching instance: the node names, indexed `1..=n`
/// exactly as the flow network indexes them, and the left/right edge list in
/// input order.
///
/// Input format, one item per line: the node count `n`, then `n` node names,
/// then the edge count `m`, then `m` edges written as two node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingInstance {
    partition_size: usize,
    names: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl MatchingInstance {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut lines = input.lines().enumerate();

        let partition_size = {
            let count = next_integer(&mut lines, "the number of nodes")?;
            if count < 2 || count % 2 != 0 {
                return Err(Error::InvalidNodeCount(count));
            }
            count as usize
        };

        // names are indexed from 1; slot 0 stays empty
        let mut names = vec![String::new(); partition_size + 1];
        for name in names.iter_mut().skip(1) {
            let (line, raw) = next_line(&mut lines, "a node name")?;
            let clean = cleanse_name(raw);
            if clean.is_empty() {
                return Err(Error::InvalidName { line });
            }
            *name = clean;
        }

        let edge_count = {
            let count = next_integer(&mut lines, "the number of edges")?;
            if count < 1 {
                return Err(Error::InvalidEdgeCount(count));
            }
            count as usize
        };

        let mut edges = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let (line, raw) = next_line(&mut lines, "an edge")?;
            edges.push(parse_edge(line, raw, partition_size)?);
        }

        debug!(nodes = partition_size, edges = edges.len(), "instance parsed");
        Ok(Self {
            partition_size,
            names,
            edges,
        })
    }

    #[inline]
    pub fn partition_size(&self) -> usize {
        self.partition_size
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Loads every input edge into a fresh residual network with unit
    /// capacity. The source and sink are not wired here.
    pub fn build_graph<Flow>(&self) -> Result<ResidualGraph<Flow>>
    where
        Flow: NumAssign + Ord + Copy,
    {
        let mut graph = ResidualGraph::new(self.partition_size);
        for &(u, v) in &self.edges {
            graph.add_edge(u, v, Flow::one())?;
        }
        Ok(graph)
    }
}

fn next_line<'a, I>(lines: &mut I, expected: &'static str) -> Result<(usize, &'a str)>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match lines.next() {
        Some((index, line)) => Ok((index + 1, line)),
        None => Err(Error::UnexpectedEof { expected }),
    }
}

fn next_integer<'a, I>(lines: &mut I, expected: &'static str) -> Result<i64>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let (line, raw) = next_line(lines, expected)?;
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidInteger { line })
}

// keeps alphanumerics and single interior spaces, drops everything else
fn cleanse_name(raw: &str) -> String {
    let mut clean = String::new();
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            clean.push(ch);
        } else if ch == ' ' && !clean.is_empty() && !clean.ends_with(' ') {
            clean.push(ch);
        }
    }
    clean
}

fn parse_edge(line: usize, raw: &str, partition_size: usize) -> Result<(usize, usize)> {
    let mut fields = raw.split_whitespace().map(str::parse::<i64>);
    let (Some(Ok(u)), Some(Ok(v))) = (fields.next(), fields.next()) else {
        return Err(Error::InvalidEdge { line });
    };
    for node in [u, v] {
        if node < 1 || node as usize > partition_size {
            return Err(Error::EdgeOutOfRange {
                line,
                node,
                partition_size,
            });
        }
    }
    Ok((u as usize, v as usize))
}
