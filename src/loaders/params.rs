//! Parameter loading.
//!
//! Every field is required: a missing key is a deserialization error and
//! initialization fails outright. No defaults are substituted, so the
//! system can never run partially configured.

use std::path::Path;

use serde::Deserialize;

use crate::types::{GridInfo, ScanMapError};

#[derive(Debug, Clone, Deserialize)]
pub struct MapperParams {
    /// Probability that a ray is kept for grid-update processing.
    pub random_downsample: f32,
    pub x: AxisParams,
    pub y: AxisParams,
    pub topics: TopicParams,
    pub frames: FrameParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AxisParams {
    pub min: f32,
    pub max: f32,
    pub num: u32,
}

/// Topic names, consumed by the embedding's pub/sub wiring.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicParams {
    pub sensor: String,
    pub vis: String,
}

/// Frame identifiers handed to the pose capability each cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameParams {
    pub fixed: String,
    pub sensor: String,
}

impl MapperParams {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScanMapError> {
        let params: Self = serde_yaml::from_str(yaml)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ScanMapError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ScanMapError> {
        if !(0.0..=1.0).contains(&self.random_downsample) {
            return Err(ScanMapError::InvalidConfig(format!(
                "random_downsample must be in [0, 1], got {}",
                self.random_downsample
            )));
        }
        // Extent validation lives with GridInfo.
        self.grid_info()?;
        Ok(())
    }

    /// Grid extents as validated metadata.
    pub fn grid_info(&self) -> Result<GridInfo, ScanMapError> {
        GridInfo::new(
            self.x.min, self.x.max, self.x.num, self.y.min, self.y.max, self.y.num,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_YAML: &str = r#"
random_downsample: 0.1
x:
  min: -10.0
  max: 10.0
  num: 100
y:
  min: -10.0
  max: 10.0
  num: 100
topics:
  sensor: /scan
  vis: /vis/grid_map
frames:
  fixed: odom
  sensor: base_scan
"#;

    #[test]
    fn full_config_parses() {
        let params = MapperParams::from_yaml_str(FULL_YAML).unwrap();
        assert_eq!(params.random_downsample, 0.1);
        assert_eq!(params.x.num, 100);
        assert_eq!(params.topics.sensor, "/scan");
        assert_eq!(params.frames.fixed, "odom");

        let info = params.grid_info().unwrap();
        assert!((info.x_res() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn missing_field_is_a_hard_failure() {
        // Drop the frames block entirely.
        let yaml = FULL_YAML.replace("frames:\n  fixed: odom\n  sensor: base_scan\n", "");
        assert!(matches!(
            MapperParams::from_yaml_str(&yaml),
            Err(ScanMapError::Yaml(_))
        ));
    }

    #[test]
    fn downsample_fraction_is_bounded() {
        let yaml = FULL_YAML.replace("random_downsample: 0.1", "random_downsample: 1.5");
        assert!(matches!(
            MapperParams::from_yaml_str(&yaml),
            Err(ScanMapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_extents_are_rejected() {
        let yaml = FULL_YAML.replace("max: 10.0", "max: -20.0");
        assert!(matches!(
            MapperParams::from_yaml_str(&yaml),
            Err(ScanMapError::InvalidExtents(_))
        ));
    }
}
