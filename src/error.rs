use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source or sink {0} is out of valid range")]
    InvalidArgument(usize),
    #[error("node {0} is out of valid range")]
    OutOfRange(usize),
    #[error("failed to read the graph file")]
    Io(#[from] std::io::Error),
    #[error("the input is empty")]
    EmptyInput,
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: expected an integer")]
    InvalidInteger { line: usize },
    #[error("there should be a positive even number of nodes, got {0}")]
    InvalidNodeCount(i64),
    #[error("line {line}: node name is invalid")]
    InvalidName { line: usize },
    #[error("edges must be greater than 0, got {0}")]
    InvalidEdgeCount(i64),
    #[error("line {line}: edge is invalid")]
    InvalidEdge { line: usize },
    #[error("line {line}: edge endpoint {node} is outside 1..={partition_size}")]
    EdgeOutOfRange {
        line: usize,
        node: i64,
        partition_size: usize,
    },
}
