//! Small value types shared by module settings

use serde::{Deserialize, Serialize};

/// An RGB color represented as three f32 values (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create from hex color (e.g., 0xffffff)
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Whether every channel lies in 0.0..=1.0
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for ColorRgb {
    fn default() -> Self {
        Self::white()
    }
}

/// Axis-aligned slicing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SliceAxis {
    X,
    Y,
    #[default]
    Z,
}

impl SliceAxis {
    /// Unit normal of the plane perpendicular to this axis
    pub fn normal(&self) -> [f64; 3] {
        match self {
            SliceAxis::X => [1.0, 0.0, 0.0],
            SliceAxis::Y => [0.0, 1.0, 0.0],
            SliceAxis::Z => [0.0, 0.0, 1.0],
        }
    }
}

/// Unit vector along `v`, or `None` if `v` is zero-length or not finite
pub fn normalize(v: [f64; 3]) -> Option<[f64; 3]> {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 && len.is_finite() {
        Some([v[0] / len, v[1] / len, v[2] / len])
    } else {
        None
    }
}
