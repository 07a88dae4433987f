use std::fmt::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::graph::{Road, RoadNetwork};

/// Render the network as `City: Neighbour1(w1), Neighbour2(w2)` lines in
/// city declaration order. Cities without outgoing roads render as `City:`.
pub fn adjacency_lines(network: &RoadNetwork) -> Vec<String> {
    network
        .cities()
        .map(|city| {
            let roads = network.neighbours(city);
            if roads.is_empty() {
                format!("{city}:")
            } else {
                let mut line = format!("{city}: ");
                for (index, road) in roads.iter().enumerate() {
                    if index > 0 {
                        line.push_str(", ");
                    }
                    let _ = write!(line, "{}({})", road.target, road.weight);
                }
                line
            }
        })
        .collect()
}

/// Render the network as a pretty-printed JSON object whose keys follow
/// city declaration order, with each city mapped to its
/// `destination -> weight` object in road insertion order.
pub fn adjacency_json(network: &RoadNetwork) -> Result<String> {
    Ok(serde_json::to_string_pretty(&AdjacencyView(network))?)
}

/// Serialisable adjacency view over a [`RoadNetwork`]. Serialised manually
/// so the map keys keep declaration order instead of an alphabetical or
/// hashed one.
struct AdjacencyView<'a>(&'a RoadNetwork);

impl Serialize for AdjacencyView<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for city in self.0.cities() {
            map.serialize_entry(city, &RoadsView(self.0.neighbours(city)))?;
        }
        map.end()
    }
}

struct RoadsView<'a>(&'a [Road]);

impl Serialize for RoadsView<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for road in self.0 {
            map.serialize_entry(&road.target, &road.weight)?;
        }
        map.end()
    }
}
