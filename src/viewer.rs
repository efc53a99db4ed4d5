//! Interactive viewer state, independent of the terminal.
//!
//! The binary owns the terminal loop; everything it decides per key press or
//! per tick lives here so it can be tested without a TTY.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::geometry::{BoxShape, Pyramid, Text};
use crate::math::{Matrix4, Vector3};
use crate::particles::{ParticleConfig, ParticleSystem, SphereEmitter};
use crate::scene::{Camera, ParticleSceneNode, Scene, SceneNode};
use crate::types::{RenderOptions, ViewerAction};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "TUI_RENDER3D_CONFIG";

const ORBIT_STEP: f64 = 0.15;
const ZOOM_STEP: f64 = 0.5;
const MIN_DISTANCE: f64 = 2.0;
const MAX_DISTANCE: f64 = 30.0;
/// Just short of straight up/down, where the view would run along +Y.
const MAX_ELEVATION: f64 = 1.45;
/// Largest particle cap a config file may ask for.
pub const MAX_PARTICLES: usize = 65_536;

/// Command line of the viewer binary.
#[derive(Debug, Parser)]
#[command(name = "tui-render3d")]
#[command(about = "Orbit a small 3D scene rendered as ASCII or Braille text", long_about = None)]
#[command(version)]
pub struct Args {
    /// JSON file overriding the default viewer settings
    #[arg(short, long, env = CONFIG_ENV, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The config named on the command line or in [`CONFIG_ENV`], or defaults.
    pub fn load_config(&self) -> Result<ViewerConfig> {
        match &self.config {
            Some(path) => ViewerConfig::load(path),
            None => Ok(ViewerConfig::default()),
        }
    }
}

/// Viewer settings, loadable from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub render: RenderOptions,
    /// Target frame interval in milliseconds.
    pub frame_ms: u64,
    /// Automatic orbit speed in radians per second.
    pub spin_speed: f64,
    /// Initial camera distance.
    pub distance: f64,
    pub max_particles: usize,
    pub emission_rate: f64,
    pub particle_lifetime: f64,
    pub seed: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let particles = ParticleConfig::default();
        Self {
            render: RenderOptions::default(),
            frame_ms: 33,
            spin_speed: 0.4,
            distance: 7.0,
            max_particles: particles.max_particles,
            emission_rate: particles.emission_rate,
            particle_lifetime: particles.particle_lifetime,
            seed: particles.seed,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("invalid viewer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Reject settings the particle simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_particles <= MAX_PARTICLES,
            "max_particles is {}, the limit is {MAX_PARTICLES}",
            self.max_particles
        );
        ensure!(
            self.emission_rate.is_finite() && self.emission_rate >= 0.0,
            "emission_rate must be a non-negative number, got {}",
            self.emission_rate
        );
        ensure!(
            self.particle_lifetime.is_finite() && self.particle_lifetime > 0.0,
            "particle_lifetime must be positive, got {}",
            self.particle_lifetime
        );
        Ok(())
    }

    pub fn particle_config(&self) -> ParticleConfig {
        ParticleConfig::default()
            .with_max_particles(self.max_particles)
            .with_emission_rate(self.emission_rate)
            .with_lifetime(self.particle_lifetime)
            .with_seed(self.seed)
    }
}

/// Camera position on a sphere around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub distance: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

impl Orbit {
    pub fn new(distance: f64) -> Self {
        Self {
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            azimuth: 0.0,
            elevation: 0.3,
        }
    }

    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(std::f64::consts::TAU);
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    pub fn zoom(&mut self, delta: f64) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn camera(&self) -> Camera {
        Camera::orbit(self.distance, self.azimuth, self.elevation, Vector3::ZERO)
    }
}

/// The demo scene: a box, a pyramid, a text label and a particle cloud.
pub fn demo_scene(config: &ViewerConfig) -> Scene {
    let cube = SceneNode::with_shape(Arc::new(BoxShape::cube(1.4)))
        .transformed(Matrix4::translation(-1.8, 0.0, 0.0) * Matrix4::rotation(0.4, 0.6, 0.0));
    let pyramid = SceneNode::with_shape(Arc::new(Pyramid::new(1.4, 1.6)))
        .transformed(Matrix4::translation(1.8, 0.0, 0.0));
    let label = SceneNode::with_shape(Arc::new(Text::new("TUI 3D").with_size(0.6)))
        .transformed(Matrix4::translation(0.0, 1.7, 0.0));

    let sparks = ParticleSystem::new(SphereEmitter::new(0.6, 0.5), config.particle_config());

    Scene::new(Camera::default())
        .with_node(cube)
        .with_node(pyramid)
        .with_node(label)
        .with_particles(
            ParticleSceneNode::new(sparks).transformed(Matrix4::translation(0.0, -1.4, 0.0)),
        )
        .with_options(config.render.clone())
}

/// Everything the viewer changes between frames.
#[derive(Debug)]
pub struct Viewer {
    pub scene: Scene,
    pub orbit: Orbit,
    pub paused: bool,
    spin_speed: f64,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        let orbit = Orbit::new(config.distance);
        let mut scene = demo_scene(config);
        scene.camera = orbit.camera();
        Self {
            scene,
            orbit,
            paused: false,
            spin_speed: config.spin_speed,
        }
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::NextMode => self.scene.options.mode = self.scene.options.mode.next(),
            ViewerAction::NextShading => {
                self.scene.options.shading = self.scene.options.shading.next()
            }
            ViewerAction::OrbitLeft => self.orbit.rotate(-ORBIT_STEP, 0.0),
            ViewerAction::OrbitRight => self.orbit.rotate(ORBIT_STEP, 0.0),
            ViewerAction::OrbitUp => self.orbit.rotate(0.0, ORBIT_STEP),
            ViewerAction::OrbitDown => self.orbit.rotate(0.0, -ORBIT_STEP),
            ViewerAction::ZoomIn => self.orbit.zoom(-ZOOM_STEP),
            ViewerAction::ZoomOut => self.orbit.zoom(ZOOM_STEP),
            ViewerAction::ResetParticles => self.scene.reset_particles(),
            ViewerAction::Pause => self.paused = !self.paused,
        }
        log::debug!("action {}", action.as_str());
        self.scene.camera = self.orbit.camera();
    }

    /// Advance the animation by `dt` seconds. Does nothing while paused.
    pub fn tick(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        self.orbit.rotate(self.spin_speed * dt, 0.0);
        self.scene.update(dt);
        self.scene.camera = self.orbit.camera();
    }
}
