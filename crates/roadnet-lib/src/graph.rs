use std::collections::{HashMap, HashSet};

/// Directed road leaving a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    pub target: String,
    pub weight: u64,
}

/// In-memory representation of the road network.
///
/// Cities keep their declaration order, which drives rendered output, and
/// each city's outgoing roads keep first-`connect` order. The network is
/// built once by the parser and treated as read-mostly afterwards; the
/// removal operations exist for structural edits outside the query path.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    names: HashSet<String>,
    order: Vec<String>,
    roads: HashMap<String, Vec<Road>>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `city` is a member of the network. Idempotent: repeated calls
    /// keep the original declaration position.
    pub fn add_node(&mut self, city: impl Into<String>) {
        let city = city.into();
        if self.names.insert(city.clone()) {
            self.order.push(city.clone());
            self.roads.entry(city).or_default();
        }
    }

    /// Create or overwrite the directed road `origin -> destination`.
    ///
    /// Both endpoints are added as members when absent. A repeated pair
    /// overwrites the stored weight in place, keeping the road's original
    /// position in the adjacency list.
    pub fn connect(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: u64,
    ) {
        let origin = origin.into();
        let destination = destination.into();
        self.add_node(origin.clone());
        self.add_node(destination.clone());

        let roads = self.roads.entry(origin).or_default();
        if let Some(existing) = roads.iter_mut().find(|road| road.target == destination) {
            existing.weight = weight;
        } else {
            roads.push(Road {
                target: destination,
                weight,
            });
        }
    }

    /// Remove `city` together with its outgoing and incoming roads.
    /// No-op when the city is not a member.
    pub fn remove_node(&mut self, city: &str) {
        if !self.names.remove(city) {
            return;
        }
        self.order.retain(|name| name != city);
        self.roads.remove(city);
        for roads in self.roads.values_mut() {
            roads.retain(|road| road.target != city);
        }
    }

    /// Remove the single directed road `origin -> destination`, leaving
    /// both endpoints and every other road untouched. No-op when absent.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) {
        if let Some(roads) = self.roads.get_mut(origin) {
            roads.retain(|road| road.target != destination);
        }
    }

    /// Outgoing roads for `origin` in first-`connect` order; empty when the
    /// city has no outgoing roads or is not a member.
    pub fn neighbours(&self, origin: &str) -> &[Road] {
        self.roads.get(origin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Base weight of the directed road `origin -> destination`, when present.
    pub fn base_weight(&self, origin: &str, destination: &str) -> Option<u64> {
        self.roads
            .get(origin)?
            .iter()
            .find(|road| road.target == destination)
            .map(|road| road.weight)
    }

    /// Whether `city` is a member of the network.
    pub fn contains(&self, city: &str) -> bool {
        self.names.contains(city)
    }

    /// Cities in declaration order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of cities in the network.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
