pub mod error;
pub mod matching;
pub mod maximum_flow;

pub use error::{Error, Result};
pub use matching::extractor::{extract_matching, Matching};
pub use matching::instance::MatchingInstance;
pub use matching::matcher::BipartiteMatcher;
pub use maximum_flow::dinic::Dinic;
pub use maximum_flow::residual_graph::ResidualGraph;
