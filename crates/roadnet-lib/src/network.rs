use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::RoadNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Cities,
    Roads,
}

/// Load a network-definition file from disk.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let contents = fs::read_to_string(path)?;
    parse_network(&contents)
}

/// Parse the CITIES/ROADS network-definition format.
///
/// Each CITIES line declares one city; names may contain interior spaces.
/// Each ROADS line is `<origin> <destination> <weight>`, where the endpoint
/// names are resolved by trying every split of the name tokens against the
/// declared city set. Blank lines and `#` comments are skipped everywhere.
/// Validation failures are fatal and carry the 1-based line number.
pub fn parse_network(input: &str) -> Result<RoadNetwork> {
    let mut network = RoadNetwork::new();
    let mut section = Section::Preamble;

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line {
            "CITIES" => {
                section = Section::Cities;
                continue;
            }
            "ROADS" => {
                section = Section::Roads;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Preamble => {}
            Section::Cities => {
                if network.contains(line) {
                    return Err(Error::DuplicateCity {
                        name: line.to_string(),
                        line: line_number,
                    });
                }
                network.add_node(line);
            }
            Section::Roads => {
                let (origin, destination, weight) = parse_road_line(&network, line, line_number)?;
                network.connect(origin, destination, weight);
            }
        }
    }

    if network.is_empty() {
        return Err(Error::MissingCitiesSection);
    }

    debug!(cities = network.len(), "parsed road network");
    Ok(network)
}

/// Split one ROADS line into validated endpoints and weight. The parser is
/// the sole weight validator; `connect` does not re-check.
fn parse_road_line(
    network: &RoadNetwork,
    line: &str,
    line_number: usize,
) -> Result<(String, String, u64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(Error::MalformedRoad {
            line: line_number,
            content: line.to_string(),
        });
    }

    let weight_token = tokens[tokens.len() - 1];
    let name_tokens = &tokens[..tokens.len() - 1];

    let (origin, destination) =
        split_city_names(network, name_tokens).ok_or_else(|| Error::UnknownRoadEndpoints {
            line: line_number,
            content: line.to_string(),
        })?;

    let weight: i64 = weight_token.parse().map_err(|_| Error::InvalidWeight {
        line: line_number,
        token: weight_token.to_string(),
    })?;
    if weight < 0 {
        return Err(Error::NegativeWeight {
            line: line_number,
            weight,
        });
    }

    Ok((origin, destination, weight as u64))
}

/// Find the split of `tokens` into two declared city names.
fn split_city_names(network: &RoadNetwork, tokens: &[&str]) -> Option<(String, String)> {
    for split in 1..tokens.len() {
        let origin = tokens[..split].join(" ");
        let destination = tokens[split..].join(" ");
        if network.contains(&origin) && network.contains(&destination) {
            return Some((origin, destination));
        }
    }
    None
}
