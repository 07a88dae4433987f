//! Traffic-aware routing over a directed, weighted road network.
//!
//! This crate parses a CITIES/ROADS network definition, layers runtime
//! traffic reports over the resulting network, and answers shortest-path
//! and bounded multi-path queries through a line-oriented command protocol.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behaviour.

#![deny(warnings)]

pub mod commands;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod traffic;

pub use commands::{parse_command, Command, CommandProcessor};
pub use error::{Error, Result};
pub use graph::{Road, RoadNetwork};
pub use network::{load_network, parse_network};
pub use output::{adjacency_json, adjacency_lines};
pub use path::{k_paths, shortest_path, RoutePath};
pub use traffic::TrafficOverlay;
