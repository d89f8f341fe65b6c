use std::path::{Path, PathBuf};

use cubepick_common::Color;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from loading a scene configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Largest accepted `grid.grid_size`; the grid then holds 65536 cubes.
pub const MAX_GRID_SIZE: u32 = 256;

/// Layout of the selectable cube grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Cubes per side. The grid holds `grid_size * grid_size` cubes.
    pub grid_size: u32,
    /// Center-to-center distance between neighbouring cubes.
    pub spacing: f32,
    /// Edge length of each cube.
    pub cube_size: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            grid_size: 3,
            spacing: 2.5,
            cube_size: 1.0,
            saturation: 0.8,
            lightness: 0.6,
        }
    }
}

/// Non-selectable floor under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundPlane {
    /// Edge length of the square plane.
    pub size: f32,
    pub height: f32,
    pub color: Color,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            size: 20.0,
            height: -1.0,
            color: Color::from_hex(0x2c3e50),
        }
    }
}

/// How the selected object is marked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    pub color: Color,
    pub emissive: Color,
    /// Uniform scale applied to the selected object.
    pub scale: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xffd700),
            emissive: Color::from_hex(0x333300),
            scale: 1.3,
        }
    }
}

/// Initial orbit camera placement and limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the remaining orbit velocity applied per frame.
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(10.0, 8.0, 12.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            min_distance: 5.0,
            max_distance: 50.0,
            damping: 0.05,
        }
    }
}

/// Everything needed to build and view the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub grid: GridLayout,
    pub ground: GroundPlane,
    pub highlight: HighlightStyle,
    pub camera: CameraConfig,
    pub background: Background,
}

/// Clear color behind the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Background(pub Color);

impl Default for Background {
    fn default() -> Self {
        Self(Color::from_hex(0x1a1a2e))
    }
}

impl SceneConfig {
    /// Parse a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.grid_size == 0 {
            return Err(ConfigError::Invalid("grid.grid_size must be at least 1".into()));
        }
        if self.grid.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Invalid(format!(
                "grid.grid_size must be at most {MAX_GRID_SIZE}"
            )));
        }
        if self.grid.cube_size <= 0.0 {
            return Err(ConfigError::Invalid("grid.cube_size must be positive".into()));
        }
        if self.highlight.scale.is_nan() || self.highlight.scale <= 0.0 {
            return Err(ConfigError::Invalid("highlight.scale must be positive".into()));
        }
        let camera = &self.camera;
        let fov = camera.fov_degrees;
        if fov.is_nan() || fov <= 0.0 || fov >= 180.0 {
            return Err(ConfigError::Invalid(
                "camera.fov_degrees must be between 0 and 180 exclusive".into(),
            ));
        }
        if camera.near.is_nan() || camera.near <= 0.0 {
            return Err(ConfigError::Invalid("camera.near must be positive".into()));
        }
        if camera.far.is_nan() || camera.far <= camera.near {
            return Err(ConfigError::Invalid(
                "camera.far must be greater than camera.near".into(),
            ));
        }
        if self.camera.min_distance > self.camera.max_distance {
            return Err(ConfigError::Invalid(
                "camera.min_distance must not exceed camera.max_distance".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_demo_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.grid.grid_size, 3);
        assert_eq!(config.grid.spacing, 2.5);
        assert_eq!(config.highlight.color.to_hex(), 0xffd700);
        assert_eq!(config.highlight.emissive.to_hex(), 0x333300);
        assert_eq!(config.highlight.scale, 1.3);
        assert_eq!(config.camera.eye, Vec3::new(10.0, 8.0, 12.0));
        assert_eq!(config.background.0.to_hex(), 0x1a1a2e);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let config = SceneConfig::from_yaml_str(
            "grid:\n  grid_size: 4\nhighlight:\n  color: \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.grid.grid_size, 4);
        assert_eq!(config.grid.spacing, 2.5);
        assert_eq!(config.highlight.color.to_hex(), 0xff0000);
        assert_eq!(config.highlight.scale, 1.3);
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = SceneConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn bad_color_is_parse_error() {
        let err = SceneConfig::from_yaml_str("highlight:\n  color: gold\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_grid_is_rejected() {
        let err = SceneConfig::from_yaml_str("grid:\n  grid_size: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let err = SceneConfig::from_yaml_str("grid:\n  grid_size: 65536\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let largest = format!("grid:\n  grid_size: {MAX_GRID_SIZE}\n");
        assert!(SceneConfig::from_yaml_str(&largest).is_ok());
    }

    #[test]
    fn degenerate_projection_is_rejected() {
        for yaml in [
            "camera:\n  near: 0\n",
            "camera:\n  near: -1\n",
            "camera:\n  near: 10\n  far: 5\n",
            "camera:\n  fov_degrees: 0\n",
            "camera:\n  fov_degrees: 180\n",
            "camera:\n  fov_degrees: .nan\n",
        ] {
            let err = SceneConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{yaml:?} accepted");
        }
    }

    #[test]
    fn non_positive_highlight_scale_is_rejected() {
        for yaml in ["highlight:\n  scale: 0\n", "highlight:\n  scale: -1.3\n"] {
            let err = SceneConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        }
    }

    #[test]
    fn inverted_camera_limits_are_rejected() {
        let err = SceneConfig::from_yaml_str("camera:\n  min_distance: 60\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "camera:\n  fov_degrees: 60\n  eye: [0.0, 10.0, 10.0]").unwrap();

        let config = SceneConfig::load(file.path()).unwrap();
        assert_eq!(config.camera.fov_degrees, 60.0);
        assert_eq!(config.camera.eye, Vec3::new(0.0, 10.0, 10.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = SceneConfig::load_or_default(None).unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn yaml_round_trip_keeps_colors_as_hex_strings() {
        let text = serde_yaml::to_string(&SceneConfig::default()).unwrap();
        assert!(text.contains("#ffd700"));
        let parsed = SceneConfig::from_yaml_str(&text).unwrap();
        assert_eq!(parsed.highlight, SceneConfig::default().highlight);
    }
}
