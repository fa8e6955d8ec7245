use crate::route::{Point, RouteMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse map: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("link from {from} to {to} has distance {distance}, distances must be positive")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
}

/// A map as written in a TOML map file.
///
/// ```toml
/// directed = false
///
/// [[links]]
/// from = "A"
/// to = "Z"
/// distance = 75
///
/// [locations]
/// A = [76, 497]
/// Z = [92, 539]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapConfig {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    #[serde(default)]
    pub locations: BTreeMap<String, Point>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkConfig {
    pub from: String,
    pub to: String,
    /// Links without a distance have distance 1.
    #[serde(default = "default_distance")]
    pub distance: f64,
}

fn default_distance() -> f64 {
    1.
}

impl MapConfig {
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, MapError> {
        Ok(toml::from_str(text)?)
    }
}

impl TryFrom<MapConfig> for RouteMap<String> {
    type Error = MapError;

    fn try_from(config: MapConfig) -> Result<Self, Self::Error> {
        if let Some(link) = config
            .links
            .iter()
            .find(|link| !(link.distance.is_finite() && link.distance > 0.))
        {
            return Err(MapError::InvalidDistance {
                from: link.from.clone(),
                to: link.to.clone(),
                distance: link.distance,
            });
        }

        let links = config
            .links
            .into_iter()
            .map(|link| ((link.from, link.to), link.distance));
        Ok(RouteMap::new(links, config.directed).with_locations(config.locations))
    }
}

/// Read a map file and build the map it describes.
pub fn load_map(path: &Path) -> Result<RouteMap<String>, MapError> {
    MapConfig::from_path(path)?.try_into()
}
