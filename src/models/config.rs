//! Pipeline configuration and command-line layering.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::DisplaySize;

/// Pipeline configuration, optionally loaded from a YAML file.
///
/// Every field has a default, so an empty file (or no file at all) reproduces
/// the plain invocation: load `lena.png`, skip quantization, sort along
/// axis 0 and show the result in a 1200x800 window.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Image to load
    pub input: PathBuf,

    /// Quantization depth; `None` skips the quantizer
    pub depth: Option<i64>,

    /// Sort axis (0 height, 1 width, 2 channel; negative counts from the end)
    pub axis: isize,

    /// Viewer window size
    pub display: DisplaySize,

    /// Log the number of distinct sample values after sorting
    pub report_masks: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("lena.png"),
            depth: None,
            axis: 0,
            display: DisplaySize::DEFAULT,
            report_masks: false,
        }
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub depth: Option<i64>,
    pub axis: Option<isize>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub report_masks: bool,
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        // Re-validate, serde accepts a zero-sized window
        DisplaySize::from_dimensions(config.display.width, config.display.height)?;

        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Layer command-line values over this configuration
    pub fn apply(&mut self, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(depth) = overrides.depth {
            self.depth = Some(depth);
        }
        if let Some(axis) = overrides.axis {
            self.axis = axis;
        }
        self.display = DisplaySize::from_dimensions(
            overrides.width.unwrap_or(self.display.width),
            overrides.height.unwrap_or(self.display.height),
        )?;
        self.report_masks |= overrides.report_masks;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();

        assert_eq!(config.input, PathBuf::from("lena.png"));
        assert_eq!(config.depth, None);
        assert_eq!(config.axis, 0);
        assert_eq!(config.display, DisplaySize::DEFAULT);
        assert!(!config.report_masks);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
input: photos/cat.png
depth: 32
axis: -1
display:
  width: 640
  height: 480
report_masks: true
"#;
        let config: PipelineConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            config,
            PipelineConfig {
                input: PathBuf::from("photos/cat.png"),
                depth: Some(32),
                axis: -1,
                display: DisplaySize {
                    width: 640,
                    height: 480
                },
                report_masks: true,
            }
        );
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let config: PipelineConfig = serde_yaml::from_str("depth: 8\n").unwrap();

        assert_eq!(config.depth, Some(8));
        assert_eq!(config.input, PathBuf::from("lena.png"));
        assert_eq!(config.axis, 0);
        assert_eq!(config.display, DisplaySize::DEFAULT);
    }

    #[test]
    fn test_parse_partial_display_keeps_other_dimension() {
        let config: PipelineConfig = serde_yaml::from_str("display:\n  width: 640\n").unwrap();

        assert_eq!(
            config.display,
            DisplaySize {
                width: 640,
                height: 800
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input: other.png\naxis: 1").unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("other.png"));
        assert_eq!(config.axis, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PipelineConfig::load(Path::new("/nonexistent/pixsort.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "axis: [not, a, number]").unwrap();

        let err = PipelineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_zero_display() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  width: 0\n  height: 10").unwrap();

        let err = PipelineConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DisplaySize {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = PipelineConfig {
            depth: Some(16),
            axis: 2,
            ..Default::default()
        };

        config
            .apply(ConfigOverrides {
                input: Some(PathBuf::from("x.png")),
                axis: Some(1),
                width: Some(300),
                report_masks: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.input, PathBuf::from("x.png"));
        assert_eq!(config.depth, Some(16));
        assert_eq!(config.axis, 1);
        assert_eq!(
            config.display,
            DisplaySize {
                width: 300,
                height: 800
            }
        );
        assert!(config.report_masks);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = PipelineConfig::default();
        config.apply(ConfigOverrides::default()).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_overrides_reject_zero_height() {
        let mut config = PipelineConfig::default();
        let err = config
            .apply(ConfigOverrides {
                height: Some(0),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::DisplaySize { .. }));
    }
}
