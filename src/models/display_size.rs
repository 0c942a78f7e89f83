//! Viewer window dimensions.

use serde::Deserialize;

use crate::error::ConfigError;

/// Size of the viewer window in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    /// 12x8 inch figure at 100 dpi
    pub const DEFAULT: Self = Self {
        width: 1200,
        height: 800,
    };

    /// Validate a requested window size
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            Err(ConfigError::DisplaySize { width, height })
        } else {
            Ok(Self { width, height })
        }
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
