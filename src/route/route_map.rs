use itertools::Itertools;
use std::collections::HashMap;
use std::hash::Hash;

/// A 2D coordinate.
pub type Point = (f64, f64);

/// Coordinate of every place without an explicit location.
pub const ORIGIN: Point = (0., 0.);

/// A map of places: a graph whose edges carry distances, and optionally a 2D
/// location for each place.
///
/// Unless the map is directed, every edge is mirrored so that it can be
/// travelled both ways at the same distance. Neighbour lists are sorted in
/// descending order so that searches behave the same from run to run.
#[derive(Debug, Clone)]
pub struct RouteMap<L> {
    distances: HashMap<L, HashMap<L, f64>>,
    neighbors: HashMap<L, Vec<L>>,
    locations: HashMap<L, Point>,
    directed: bool,
}

impl<L> RouteMap<L>
where
    L: Clone + Eq + Hash + Ord,
{
    /// Build a map from `((from, to), distance)` links. When the same ordered
    /// pair shows up more than once the last distance wins.
    ///
    /// In an undirected map the mirroring walks the distinct pairs in the
    /// order they first appeared, and each pair copies its current distance
    /// onto its reverse. A pair `(a, b)` listed before an explicit `(b, a)`
    /// therefore sets the distance both ways.
    pub fn new(links: impl IntoIterator<Item = ((L, L), f64)>, directed: bool) -> Self {
        let mut order: Vec<(L, L)> = Vec::new();
        let mut distances: HashMap<L, HashMap<L, f64>> = HashMap::new();
        for ((from, to), distance) in links {
            // Places that can only be entered still get a neighbour list
            distances.entry(to.clone()).or_default();
            let targets = distances.entry(from.clone()).or_default();
            if targets.insert(to.clone(), distance).is_none() {
                order.push((from, to));
            }
        }

        if !directed {
            for (from, to) in order {
                let distance = distances.get(&from).and_then(|targets| targets.get(&to));
                if let Some(&distance) = distance {
                    distances.entry(to).or_default().insert(from, distance);
                }
            }
        }

        let neighbors: HashMap<L, Vec<L>> = distances
            .iter()
            .map(|(from, targets)| {
                let places = targets.keys().cloned().sorted_unstable_by(|a, b| b.cmp(a));
                (from.clone(), places.collect::<Vec<L>>())
            })
            .collect();

        Self {
            distances,
            neighbors,
            locations: HashMap::new(),
            directed,
        }
    }

    /// Build a map where every link has distance 1.
    pub fn unweighted(links: impl IntoIterator<Item = (L, L)>, directed: bool) -> Self {
        Self::new(links.into_iter().map(|link| (link, 1.)), directed)
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = (L, Point)>) -> Self {
        self.locations.extend(locations);
        self
    }

    pub fn distance(&self, from: &L, to: &L) -> Option<f64> {
        self.distances.get(from)?.get(to).copied()
    }

    /// Places directly reachable from `place`, in descending order.
    pub fn neighbors(&self, place: &L) -> &[L] {
        self.neighbors
            .get(place)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Location of `place`, the origin if none was given.
    pub fn location(&self, place: &L) -> Point {
        self.locations.get(place).copied().unwrap_or(ORIGIN)
    }

    pub fn has_location(&self, place: &L) -> bool {
        self.locations.contains_key(place)
    }

    /// Whether `place` is on the map, either at the end of a link or with a
    /// location.
    pub fn contains(&self, place: &L) -> bool {
        self.neighbors.contains_key(place) || self.locations.contains_key(place)
    }

    /// Every place on the map, sorted.
    pub fn places(&self) -> Vec<&L> {
        self.neighbors
            .keys()
            .chain(self.locations.keys())
            .sorted()
            .dedup()
            .collect()
    }

    /// Every `((from, to), distance)` link, mirrored ones included, sorted by
    /// pair.
    pub fn links(&self) -> Vec<((&L, &L), f64)> {
        self.distances
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .map(move |(to, distance)| ((from, to), *distance))
            })
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}
