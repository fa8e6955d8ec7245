use crate::route::{MapConfig, RouteMap, RouteProblem};
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

pub const ROMANIA_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/romania.toml"));

pub fn romania_config() -> MapConfig {
    MapConfig::from_text(ROMANIA_MAP_TEXT).unwrap()
}

pub fn romania_map() -> RouteMap<String> {
    romania_config().try_into().unwrap()
}

pub fn romania_map_without_locations() -> RouteMap<String> {
    let mut config = romania_config();
    config.locations.clear();
    config.try_into().unwrap()
}

pub fn romania_map_unweighted() -> RouteMap<String> {
    let config = romania_config();
    RouteMap::unweighted(
        config.links.into_iter().map(|link| (link.from, link.to)),
        config.directed,
    )
}

pub fn romania_problem(initial: &str, goal: &str) -> RouteProblem<String> {
    RouteProblem::new(
        initial.to_string(),
        goal.to_string(),
        Arc::new(romania_map()),
    )
}

/// The part of the Romania map around Arad: O-Z, O-S, A-Z, A-S, A-T and S-R,
/// with their Romania locations.
pub fn romania_subset_problem(initial: &str, goal: &str) -> RouteProblem<String> {
    let config = romania_config();
    let links = [
        ("O", "Z", 71.),
        ("O", "S", 151.),
        ("A", "Z", 75.),
        ("A", "S", 140.),
        ("A", "T", 118.),
        ("S", "R", 80.),
    ]
    .map(|(from, to, distance)| ((from.to_string(), to.to_string()), distance));
    let map = RouteMap::new(links, false).with_locations(
        config
            .locations
            .into_iter()
            .filter(|(place, _)| ["O", "Z", "A", "S", "T", "R"].contains(&place.as_str())),
    );
    RouteProblem::new(initial.to_string(), goal.to_string(), Arc::new(map))
}

/// An undirected ring 0 - 1 - ... - (n - 1) - 0 with unit distances.
pub fn ring_map(n: u32) -> RouteMap<u32> {
    RouteMap::unweighted((0..n).map(|i| (i, (i + 1) % n)), false)
}

/// Visit every simple path starting at `from`, calling `visit` with the last
/// place, the number of edges and the cost of each.
fn for_each_simple_path<L, F>(map: &RouteMap<L>, from: &L, visit: &mut F)
where
    L: Clone + Eq + Hash + Ord,
    F: FnMut(&L, usize, f64),
{
    fn walk<L, F>(
        map: &RouteMap<L>,
        place: &L,
        edges: usize,
        cost: f64,
        on_path: &mut HashSet<L>,
        visit: &mut F,
    ) where
        L: Clone + Eq + Hash + Ord,
        F: FnMut(&L, usize, f64),
    {
        visit(place, edges, cost);
        for next in map.neighbors(place) {
            if on_path.insert(next.clone()) {
                let distance = map.distance(place, next).unwrap();
                walk(map, next, edges + 1, cost + distance, on_path, visit);
                on_path.remove(next);
            }
        }
    }

    let mut on_path = HashSet::from([from.clone()]);
    walk(map, from, 0, 0., &mut on_path, visit);
}

/// Fewest edges between two places, found by trying every simple path.
pub fn reference_fewest_edges<L>(map: &RouteMap<L>, from: &L, to: &L) -> Option<usize>
where
    L: Clone + Eq + Hash + Ord,
{
    let mut best: Option<usize> = None;
    for_each_simple_path(map, from, &mut |place, edges, _| {
        if place == to && best.map_or(true, |best| edges < best) {
            best = Some(edges);
        }
    });
    best
}

/// Cheapest cost between two places, found by trying every simple path.
pub fn reference_cheapest_cost<L>(map: &RouteMap<L>, from: &L, to: &L) -> Option<f64>
where
    L: Clone + Eq + Hash + Ord,
{
    let mut best: Option<f64> = None;
    for_each_simple_path(map, from, &mut |place, _, cost| {
        if place == to && best.map_or(true, |best| cost < best) {
            best = Some(cost);
        }
    });
    best
}
