//! Core engine: recipe parsing, target graph, variables, and the
//! depth-first runner.

pub mod executor;
pub mod graph;
pub mod parser;
pub mod vars;
