use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Settings for generating a world map.
///
/// Missing fields fall back to [`MapParameters::default`] when deserializing, so a JSON document
/// only needs to name what it changes:
///
/// ```rust
/// use world_map_generator::MapParameters;
///
/// let parameters = MapParameters::from_json_str(r#"{ "width": 20, "seed": 7 }"#).unwrap();
/// assert_eq!(parameters.width, 20);
/// assert_eq!(parameters.height, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParameters {
    pub width: i32,
    pub height: i32,
    /// The chance of each cell to become an obstacle. `0.0` means no obstacle, `1.0` means every cell
    /// except one on the edge.
    pub obstacle_ratio: f64,
    pub seed: u64,
}

impl Default for MapParameters {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            obstacle_ratio: 0.1,
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|duration| duration.as_millis() as u64)
                .unwrap_or_default(),
        }
    }
}

impl MapParameters {
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        let map_parameters: Self = serde_json::from_str(json)?;
        map_parameters.validate()?;
        Ok(map_parameters)
    }

    /// Checks the parameters before any map is built.
    ///
    /// An obstacle ratio outside `[0, 1]` is accepted here, generation clamps it.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MapError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.obstacle_ratio.is_nan() {
            return Err(MapError::InvalidObstacleRatio(self.obstacle_ratio));
        }
        Ok(())
    }
}
