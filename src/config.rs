//! Device configuration.

use serde::{Deserialize, Serialize};

use crate::common::unit::inches_to_pt;
use crate::error::{DrawingError, Result};

/// Default canvas width in inches (23.5 cm).
pub const DEFAULT_WIDTH: f64 = 23.5 / 2.54;
/// Default canvas height in inches (14.5 cm).
pub const DEFAULT_HEIGHT: f64 = 14.5 / 2.54;
pub const DEFAULT_POINT_SIZE: f64 = 10.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Options a [`Device`](crate::device::Device) is opened with.
///
/// Sizes are in inches. Options can be loaded from YAML; missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceOptions {
    pub width: f64,
    pub height: f64,
    /// Initial font size in points.
    pub point_size: f64,
    pub font_family: String,
}

impl Default for DeviceOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_size: DEFAULT_POINT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_nan() || value <= 0.0 { default } else { value }
}

impl DeviceOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Replace NaN or non-positive sizes, and an empty family, with the
    /// defaults.
    pub fn sanitized(self) -> Self {
        let font_family = if self.font_family.is_empty() {
            DEFAULT_FONT_FAMILY.to_string()
        } else {
            self.font_family
        };
        Self {
            width: positive_or(self.width, DEFAULT_WIDTH),
            height: positive_or(self.height, DEFAULT_HEIGHT),
            point_size: positive_or(self.point_size, DEFAULT_POINT_SIZE),
            font_family,
        }
    }

    /// Canvas size in points.
    pub fn canvas_size(&self) -> (f64, f64) {
        (inches_to_pt(self.width), inches_to_pt(self.height))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| DrawingError::Config(format!("Failed to parse device options: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| DrawingError::Config(format!("Failed to serialize device options: {}", e)))
    }
}
