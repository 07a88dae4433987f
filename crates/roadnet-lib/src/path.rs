use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::graph::RoadNetwork;
use crate::traffic::TrafficOverlay;

/// A concrete route through the network together with its total cost under
/// the traffic overlay it was computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub steps: Vec<String>,
    pub cost: u64,
}

impl RoutePath {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Find the cheapest route from `start` to `end` under `traffic`.
///
/// Returns `None` when either endpoint is unknown or the frontier empties
/// without reaching `end`; both are ordinary query outcomes, never errors.
///
/// Frontier entries carry their full path from the start city rather than
/// back-pointers. That trades memory for simplicity at the scale this
/// library targets, and it makes the tie-break observable: among equal-cost
/// candidates the one whose path sorts lexicographically first is expanded
/// first, so the returned route is deterministic.
pub fn shortest_path(
    network: &RoadNetwork,
    traffic: &TrafficOverlay,
    start: &str,
    end: &str,
) -> Option<RoutePath> {
    if !network.contains(start) || !network.contains(end) {
        return None;
    }

    let mut frontier = BinaryHeap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut distances: HashMap<String, u64> = HashMap::new();

    distances.insert(start.to_string(), 0);
    frontier.push(QueueEntry {
        cost: 0,
        path: vec![start.to_string()],
    });

    while let Some(QueueEntry { cost, path }) = frontier.pop() {
        let city = path.last().cloned().unwrap_or_default();
        if !visited.insert(city.clone()) {
            continue;
        }

        // First finalisation of the target is final: every effective weight
        // is at least 1, so the standard Dijkstra argument holds.
        if city == end {
            return Some(RoutePath { steps: path, cost });
        }

        for road in network.neighbours(&city) {
            if visited.contains(&road.target) {
                continue;
            }
            let Some(weight) = traffic.effective_weight(network, &city, &road.target) else {
                continue;
            };

            let candidate = cost + weight;
            let improves = distances
                .get(&road.target)
                .map_or(true, |best| candidate < *best);
            if improves {
                distances.insert(road.target.clone(), candidate);
                let mut next_path = path.clone();
                next_path.push(road.target.clone());
                frontier.push(QueueEntry {
                    cost: candidate,
                    path: next_path,
                });
            }
        }
    }

    None
}

/// Enumerate up to `k` simple routes from `start` to `end`, in completion
/// order (cheapest-first by exploration, same tie-break as
/// [`shortest_path`]).
///
/// This is a bounded best-first enumeration, not a true K-shortest-paths
/// algorithm: results may share prefixes, every simple path is a candidate,
/// and dense networks can make the search combinatorially expensive. Unknown
/// endpoints and unreachable targets yield an empty list.
pub fn k_paths(
    network: &RoadNetwork,
    traffic: &TrafficOverlay,
    start: &str,
    end: &str,
    k: usize,
) -> Vec<RoutePath> {
    if k == 0 || !network.contains(start) || !network.contains(end) {
        return Vec::new();
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(EnumerationEntry {
        cost: 0,
        path: vec![start.to_string()],
        visited: HashSet::from([start.to_string()]),
    });

    let mut results = Vec::new();
    while let Some(EnumerationEntry {
        cost,
        path,
        visited,
    }) = frontier.pop()
    {
        let city = path.last().cloned().unwrap_or_default();

        // A completed route is recorded and never expanded further. The
        // visited set only prevents cycles within a single candidate;
        // completed routes are not deduplicated against each other.
        if city == end {
            results.push(RoutePath { steps: path, cost });
            if results.len() == k {
                break;
            }
            continue;
        }

        for road in network.neighbours(&city) {
            if visited.contains(&road.target) {
                continue;
            }
            let Some(weight) = traffic.effective_weight(network, &city, &road.target) else {
                continue;
            };

            let mut next_path = path.clone();
            next_path.push(road.target.clone());
            let mut next_visited = visited.clone();
            next_visited.insert(road.target.clone());
            frontier.push(EnumerationEntry {
                cost: cost + weight,
                path: next_path,
                visited: next_visited,
            });
        }
    }

    results
}

/// Frontier candidate carrying its full path; the current city is the last
/// path element.
#[derive(Debug, Clone, Eq, PartialEq)]
struct QueueEntry {
    cost: u64,
    path: Vec<String>,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap: cheapest cost
        // first, cost ties broken by lexicographic comparison of the full
        // path sequence (which ends with the current city).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier candidate for enumeration, additionally tracking the cities
/// already on the path. The visited set does not participate in ordering.
#[derive(Debug, Clone)]
struct EnumerationEntry {
    cost: u64,
    path: Vec<String>,
    visited: HashSet<String>,
}

impl PartialEq for EnumerationEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.path == other.path
    }
}

impl Eq for EnumerationEntry {}

impl Ord for EnumerationEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for EnumerationEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
