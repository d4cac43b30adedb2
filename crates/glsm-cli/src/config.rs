//! Scene configuration loaded from YAML.
//!
//! Every field is optional; missing ones take the demo scene defaults.
//!
//! ```yaml
//! camera:
//!   cam_ang: [0.3, -0.2]
//!   cam_dist: 5.0
//! projection:
//!   fov_y: 60
//! viewport:
//!   width: 800
//!   height: 600
//! noise:
//!   seed: 7
//!   octaves: 6
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use glsm_math::camera::{OrbitCamera, perspective_projection};
use glsm_math::{Mat4, Vec2, Vec3, Viewport};
use glsm_noise::{Fbm, Perlin};
use serde::{Deserialize, Serialize};

/// Whole scene: camera, projection, viewport and noise settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub viewport: ViewportConfig,
    pub noise: NoiseConfig,
}

/// Initial orbit camera state. Angles in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub cam_ang: [f64; 2],
    pub light_ang: [f64; 2],
    pub cam_pos: [f64; 3],
    pub cam_dist: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let cam = OrbitCamera::default();
        Self {
            cam_ang: cam.cam_ang.to_array(),
            light_ang: cam.light_ang.to_array(),
            cam_pos: cam.cam_pos.to_array(),
            cam_dist: cam.cam_dist,
        }
    }
}

impl CameraConfig {
    pub fn orbit(&self) -> OrbitCamera {
        OrbitCamera {
            cam_ang: Vec2::from_array(self.cam_ang),
            light_ang: Vec2::from_array(self.light_ang),
            cam_pos: Vec3::from_array(self.cam_pos),
            cam_dist: self.cam_dist,
        }
    }
}

/// Perspective projection. `fov_y` in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    pub fn matrix(&self, aspect: f64) -> Mat4 {
        perspective_projection(self.fov_y, aspect, self.near, self.far)
    }
}

/// Render target rectangle in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1280,
            height: 720,
        }
    }
}

impl ViewportConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Fractal noise settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: u32,
    pub scale: f32,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        let fbm = Fbm::default();
        Self {
            seed: glsm_noise::DEFAULT_SEED,
            scale: 4.0,
            octaves: fbm.octaves,
            lacunarity: fbm.lacunarity,
            gain: fbm.gain,
        }
    }
}

impl NoiseConfig {
    pub fn fbm(&self) -> Fbm {
        Fbm {
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            gain: self.gain,
        }
    }

    pub fn perlin(&self) -> Perlin {
        Perlin::new(self.seed)
    }
}

impl SceneConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Loads and validates a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses and validates YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document is a valid all-defaults config
        let cfg: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        let vp = &self.viewport;
        if vp.width <= 0 || vp.height <= 0 {
            bail!("viewport must have a positive size, got {}x{}", vp.width, vp.height);
        }
        let p = &self.projection;
        if !(p.near > 0.0 && p.far > p.near) {
            bail!("projection needs 0 < near < far, got near={} far={}", p.near, p.far);
        }
        if !(p.fov_y > 0.0 && p.fov_y < 180.0) {
            bail!("fov_y must be in (0, 180) degrees, got {}", p.fov_y);
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Projection matrix for the configured viewport aspect.
    pub fn projection(&self) -> Mat4 {
        self.projection.matrix(self.viewport().aspect())
    }
}
