use std::collections::HashMap;

use crate::graph::RoadNetwork;

/// Sparse runtime weight adjustment layered over a [`RoadNetwork`].
///
/// The overlay never mutates the network it shadows: traffic is a transient,
/// queryable view with the lifetime of one command-processing session, and
/// re-applying a zero delta restores base behaviour for that road.
#[derive(Debug, Clone, Default)]
pub struct TrafficOverlay {
    deltas: HashMap<String, HashMap<String, i64>>,
}

impl TrafficOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a traffic report for one directed pair.
    ///
    /// Unconditional upsert: a later report for the same pair fully replaces
    /// the earlier one, and the pair is not required to be an existing road.
    pub fn apply_report(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        delta: i64,
    ) {
        self.deltas
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), delta);
    }

    /// Delta currently recorded for the pair, zero when none exists.
    pub fn delta(&self, origin: &str, destination: &str) -> i64 {
        self.deltas
            .get(origin)
            .and_then(|reports| reports.get(destination))
            .copied()
            .unwrap_or(0)
    }

    /// Effective weight of `origin -> destination` under current traffic.
    ///
    /// `None` when the network has no such road; a delta recorded for a pair
    /// without a base road has no observable effect. Otherwise the base
    /// weight plus the recorded delta, clamped to a minimum of 1: traffic
    /// can slow a road down but never close it, and the clamp also absorbs
    /// large negative deltas.
    pub fn effective_weight(
        &self,
        network: &RoadNetwork,
        origin: &str,
        destination: &str,
    ) -> Option<u64> {
        let base = network.base_weight(origin, destination)?;
        let adjusted = (base as i64).saturating_add(self.delta(origin, destination));
        Some(adjusted.max(1) as u64)
    }
}
