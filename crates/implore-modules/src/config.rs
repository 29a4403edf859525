//! Configuration for module defaults
//!
//! Every freshly allocated module starts from these settings. The factory
//! validates a config once, when it is built.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::{normalize, ColorRgb, SliceAxis};

/// Default settings for every module kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub outline: OutlineConfig,
    pub slice: SliceConfig,
    pub orthogonal_slice: OrthogonalSliceConfig,
    pub ruler: RulerConfig,
    pub scale_cube: ScaleCubeConfig,
    pub contour: ContourConfig,
    pub volume: VolumeConfig,
    pub threshold: ThresholdConfig,
    pub molecule: MoleculeConfig,
}

/// Bounding-box outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub color: ColorRgb,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            color: ColorRgb::white(),
        }
    }
}

/// Arbitrary-plane slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Plane normal (need not be unit length)
    pub normal: [f64; 3],
    /// Plane position along the normal as a fraction of the extent
    pub position: f64,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            normal: [0.0, 0.0, 1.0],
            position: 0.5,
        }
    }
}

/// Axis-aligned slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthogonalSliceConfig {
    pub axis: SliceAxis,
    /// Slice index as a fraction of the extent along `axis`
    pub position: f64,
}

impl Default for OrthogonalSliceConfig {
    fn default() -> Self {
        Self {
            axis: SliceAxis::Z,
            position: 0.5,
        }
    }
}

/// Distance ruler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub unit: String,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            unit: "nm".to_string(),
        }
    }
}

/// Reference cube of known size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleCubeConfig {
    pub side_length: f64,
    pub unit: String,
}

impl Default for ScaleCubeConfig {
    fn default() -> Self {
        Self {
            side_length: 10.0,
            unit: "nm".to_string(),
        }
    }
}

/// Iso-surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourConfig {
    /// Iso value as a fraction of the scalar range
    pub iso_value: f64,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self { iso_value: 0.5 }
    }
}

/// Direct volume rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub opacity: f64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

/// Scalar threshold band, as fractions of the scalar range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub lower: f64,
    pub upper: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            lower: 0.25,
            upper: 0.75,
        }
    }
}

/// Ball-and-stick rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoleculeConfig {
    pub ball_radius: f64,
    pub bond_radius: f64,
}

impl Default for MoleculeConfig {
    fn default() -> Self {
        Self {
            ball_radius: 0.5,
            bond_radius: 0.1,
        }
    }
}

impl ModuleConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let color = &self.outline.color;
        for (field, value) in [
            ("outline.color.r", color.r),
            ("outline.color.g", color.g),
            ("outline.color.b", color.b),
        ] {
            check_fraction(field, value as f64)?;
        }

        if normalize(self.slice.normal).is_none() {
            return Err(ConfigError::DegenerateNormal {
                normal: self.slice.normal,
            });
        }
        check_fraction("slice.position", self.slice.position)?;
        check_fraction("orthogonal_slice.position", self.orthogonal_slice.position)?;

        check_positive("scale_cube.side_length", self.scale_cube.side_length)?;

        check_fraction("contour.iso_value", self.contour.iso_value)?;
        check_fraction("volume.opacity", self.volume.opacity)?;

        check_fraction("threshold.lower", self.threshold.lower)?;
        check_fraction("threshold.upper", self.threshold.upper)?;
        if self.threshold.lower >= self.threshold.upper {
            return Err(ConfigError::InvalidRange {
                field: "threshold",
                lower: self.threshold.lower,
                upper: self.threshold.upper,
            });
        }

        check_positive("molecule.ball_radius", self.molecule.ball_radius)?;
        check_positive("molecule.bond_radius", self.molecule.bond_radius)?;

        Ok(())
    }
}

fn check_fraction(field: &'static str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModuleConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_serialization() {
        let config = ModuleConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ModuleConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml() {
        let config = ModuleConfig::from_toml(
            r#"
[volume]
opacity = 0.4

[orthogonal_slice]
axis = "X"
"#,
        )
        .unwrap();

        assert_eq!(config.volume.opacity, 0.4);
        assert_eq!(config.orthogonal_slice.axis, SliceAxis::X);
        assert_eq!(config.threshold, ThresholdConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = ModuleConfig::default();
        config.ruler.unit = "Å".to_string();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ModuleConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = ModuleConfig::default();
        config.threshold.lower = 0.8;
        config.threshold.upper = 0.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { field: "threshold", .. })
        ));
    }

    #[test]
    fn test_out_of_range() {
        let mut config = ModuleConfig::default();
        config.volume.opacity = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "volume.opacity", .. })
        ));
    }

    #[test]
    fn test_not_positive() {
        let mut config = ModuleConfig::default();
        config.molecule.bond_radius = 0.0;
        assert!(config.validate().is_err());

        let mut config = ModuleConfig::default();
        config.scale_cube.side_length = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_infinite_length() {
        let mut config = ModuleConfig::default();
        config.scale_cube.side_length = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "scale_cube.side_length",
                ..
            })
        ));

        let mut config = ModuleConfig::default();
        config.molecule.ball_radius = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_normal() {
        let mut config = ModuleConfig::default();
        config.slice.normal = [0.0, 0.0, 0.0];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DegenerateNormal {
                normal: [0.0, 0.0, 0.0]
            })
        );
    }

    #[test]
    fn test_non_finite_normal() {
        let mut config = ModuleConfig::default();
        config.slice.normal = [f64::NAN, 0.0, 0.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateNormal { .. })
        ));

        config.slice.normal = [0.0, f64::INFINITY, 1.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateNormal { .. })
        ));

        config.slice.normal = [0.0, 2.0, 0.0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            ModuleConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ModuleConfig::from_toml("[volume\nopacity ="),
            Err(ConfigError::Toml(_))
        ));
    }
}
