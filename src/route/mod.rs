//! Route finding on a map of places, the concrete search problem shipped with
//! the crate.

mod map_config;
mod route_map;
mod route_problem;

pub use map_config::{load_map, LinkConfig, MapConfig, MapError};
pub use route_map::{Point, RouteMap, ORIGIN};
pub use route_problem::{straight_line_distance, RouteProblem};
