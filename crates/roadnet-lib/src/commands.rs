use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::RoadNetwork;
use crate::path::{k_paths, shortest_path, RoutePath};
use crate::traffic::TrafficOverlay;

/// A single parsed protocol directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Adjust the traffic delta for one directed road pair.
    TrafficReport {
        origin: String,
        destination: String,
        delta: i64,
    },
    /// Request the single cheapest route.
    ShortestPath { origin: String, destination: String },
    /// Request up to `k` routes.
    KPaths {
        origin: String,
        destination: String,
        k: i64,
    },
}

/// Parse one protocol line.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Any other line that
/// does not match the grammar produces an error the caller reports against
/// the line number; tokens are separated by runs of whitespace, so city
/// names are single-token at this boundary.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first().copied() {
        Some("TRAFFIC_REPORT") => {
            if tokens.len() != 4 {
                return Err(Error::MalformedTrafficReport {
                    line: line.to_string(),
                });
            }
            let delta = parse_delta(tokens[3])?;
            Ok(Some(Command::TrafficReport {
                origin: tokens[1].to_string(),
                destination: tokens[2].to_string(),
                delta,
            }))
        }
        Some("QUERY") => parse_query(&tokens, line),
        _ => Err(Error::UnknownDirective {
            line: line.to_string(),
        }),
    }
}

fn parse_query(tokens: &[&str], line: &str) -> Result<Option<Command>> {
    let Some(kind) = tokens.get(1) else {
        return Err(Error::MalformedQuery {
            line: line.to_string(),
        });
    };

    match *kind {
        "SHORTEST_PATH" => {
            if tokens.len() != 4 {
                return Err(Error::MalformedQuery {
                    line: line.to_string(),
                });
            }
            Ok(Some(Command::ShortestPath {
                origin: tokens[2].to_string(),
                destination: tokens[3].to_string(),
            }))
        }
        "K_PATHS" => {
            if tokens.len() != 5 {
                return Err(Error::MalformedQuery {
                    line: line.to_string(),
                });
            }
            let k = tokens[4].parse().map_err(|_| Error::InvalidPathCount {
                token: tokens[4].to_string(),
            })?;
            Ok(Some(Command::KPaths {
                origin: tokens[2].to_string(),
                destination: tokens[3].to_string(),
                k,
            }))
        }
        other => Err(Error::UnknownQueryType {
            query_type: other.to_string(),
        }),
    }
}

/// Parse a delta token: `+N`, `-N`, or a bare integer literal.
fn parse_delta(token: &str) -> Result<i64> {
    let invalid = || Error::InvalidDelta {
        token: token.to_string(),
    };
    if let Some(rest) = token.strip_prefix('+') {
        rest.parse().map_err(|_| invalid())
    } else if let Some(rest) = token.strip_prefix('-') {
        rest.parse::<i64>().map(|value| -value).map_err(|_| invalid())
    } else {
        token.parse().map_err(|_| invalid())
    }
}

/// Executes a stream of protocol directives against a road network.
///
/// The processor owns the traffic overlay for its session: reports
/// accumulate across subsequent queries and are discarded with the
/// processor. Commands run strictly in stream order, so every query sees
/// exactly the reports that precede it in the stream and none that follow.
#[derive(Debug)]
pub struct CommandProcessor<'a> {
    network: &'a RoadNetwork,
    overlay: TrafficOverlay,
}

impl<'a> CommandProcessor<'a> {
    /// Start a fresh session over `network` with an empty overlay.
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self {
            network,
            overlay: TrafficOverlay::new(),
        }
    }

    /// Overlay state accumulated so far in this session.
    pub fn overlay(&self) -> &TrafficOverlay {
        &self.overlay
    }

    /// Execute one command; queries return their formatted output block.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::TrafficReport {
                origin,
                destination,
                delta,
            } => {
                debug!(%origin, %destination, delta, "applied traffic report");
                self.overlay.apply_report(origin, destination, delta);
                None
            }
            Command::ShortestPath {
                origin,
                destination,
            } => {
                let route = shortest_path(self.network, &self.overlay, &origin, &destination);
                Some(format_shortest_path(&origin, &destination, route.as_ref()))
            }
            Command::KPaths {
                origin,
                destination,
                k,
            } => {
                // Negative counts came through the integer grammar; they
                // simply bound the enumeration at zero results.
                let limit = usize::try_from(k).unwrap_or(0);
                let routes = k_paths(self.network, &self.overlay, &origin, &destination, limit);
                Some(format_k_paths(&origin, &destination, &routes))
            }
        }
    }

    /// Run every line from `input`, writing query results to `out` and
    /// per-line errors to `err`.
    ///
    /// A malformed line is reported as `Error processing line <n>: <message>`
    /// against its 1-based number and skipped; a single bad line never
    /// aborts the batch. Only I/O failures are fatal.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        mut out: W,
        mut err: E,
    ) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if let Some(block) = self.execute(command) {
                        writeln!(out, "{block}")?;
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    writeln!(err, "Error processing line {}: {}", index + 1, error)?;
                }
            }
        }
        Ok(())
    }
}

fn format_shortest_path(origin: &str, destination: &str, route: Option<&RoutePath>) -> String {
    match route {
        Some(route) => format!(
            "SHORTEST_PATH {} {}: {} (cost: {})",
            origin,
            destination,
            route.steps.join(" -> "),
            route.cost
        ),
        None => format!("SHORTEST_PATH {} {}: No path found", origin, destination),
    }
}

fn format_k_paths(origin: &str, destination: &str, routes: &[RoutePath]) -> String {
    let mut block = format!("K_PATHS {} {}:", origin, destination);
    if routes.is_empty() {
        block.push_str("\nNo paths found");
    } else {
        for (index, route) in routes.iter().enumerate() {
            block.push_str(&format!(
                "\n{}) {} ({})",
                index + 1,
                route.steps.join(" -> "),
                route.cost
            ));
        }
    }
    block
}
