//! Core types module - shared configuration, enums and constants
//!
//! This module defines the render-mode selection, shading styles and the
//! optional knobs every renderer reads. Types here are plain data so they can
//! be used by the core, the terminal layer and config files alike.
//!
//! # Render Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ASPECT_CORRECTION` | 2.0 | Horizontal stretch for cells ~2x taller than wide |
//! | `DEFAULT_AMBIENT` | 0.1 | Ambient term of Lambertian shading |
//! | `SOLID_BRIGHTNESS` | 0.7 | Constant brightness of the `solid` style |
//! | `DEFAULT_SHADING_RAMP` | `.,-~:;=!*#$@` | ASCII ramp, dark to light |
//! | `DEFAULT_WIREFRAME_CHAR` | `*` | Glyph plotted for ASCII wireframe edges |
//! | `DEFAULT_FOV_Y` | 60° | Camera vertical field of view |
//! | `DEFAULT_NEAR` / `DEFAULT_FAR` | 0.1 / 100 | Camera clip distances |
//!
//! # Braille Cells
//!
//! A Braille cell is 2 columns by 4 rows of dots. The glyph code point is
//! `U+2800 + mask`, where the left column uses bits 0, 1, 2, 6 and the right
//! column bits 3, 4, 5, 7 (top to bottom). Shaded cells are dithered against
//! [`BRAILLE_DITHER_THRESHOLDS`].
//!
//! # Examples
//!
//! ```
//! use tui_render3d_types::{RenderMode, ShadingStyle};
//!
//! // Parse from string (case-insensitive)
//! let mode = RenderMode::from_str("Braille-Solid").unwrap();
//! assert_eq!(mode, RenderMode::BrailleSolid);
//! assert!(mode.is_braille() && mode.is_solid());
//!
//! // Cycle
//! assert_eq!(ShadingStyle::Depth.next(), ShadingStyle::Lit);
//! assert_eq!(ShadingStyle::Lit.next(), ShadingStyle::Wireframe);
//! ```

use std::f64::consts::FRAC_PI_3;

use serde::{Deserialize, Serialize};
use tui_render3d_math::Vector3;

/// Horizontal aspect correction (terminal cells are roughly twice as tall as wide).
pub const DEFAULT_ASPECT_CORRECTION: f64 = 2.0;

/// Ambient light level for the `lit` shading style.
pub const DEFAULT_AMBIENT: f64 = 0.1;

/// Brightness used by the flat `solid` shading style.
pub const SOLID_BRIGHTNESS: f64 = 0.7;

/// ASCII shading ramp, darkest first.
pub const DEFAULT_SHADING_RAMP: &str = ".,-~:;=!*#$@";

/// Glyph drawn for ASCII wireframe edges.
pub const DEFAULT_WIREFRAME_CHAR: char = '*';

/// Light direction before normalization (from the upper left, towards the viewer).
pub const DEFAULT_LIGHT_DIRECTION: Vector3 = Vector3::new(-1.0, 1.0, 1.0);

/// Default camera vertical field of view (60 degrees).
pub const DEFAULT_FOV_Y: f64 = FRAC_PI_3;

/// Default near clip distance.
pub const DEFAULT_NEAR: f64 = 0.1;

/// Default far clip distance.
pub const DEFAULT_FAR: f64 = 100.0;

/// Empty Braille glyph (no dots raised).
pub const BRAILLE_BLANK: char = '\u{2800}';

/// Braille sub-pixel columns per terminal cell.
pub const BRAILLE_CELL_WIDTH: usize = 2;

/// Braille sub-pixel rows per terminal cell.
pub const BRAILLE_CELL_HEIGHT: usize = 4;

/// Dot bit for each sub-pixel, indexed `[row][col]`.
pub const BRAILLE_DOT_BITS: [[u8; BRAILLE_CELL_WIDTH]; BRAILLE_CELL_HEIGHT] =
    [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Ordered-dither thresholds, indexed `[row][col]`.
///
/// Values are `(rank + 0.5) / 8` for the 2x4 rank matrix
/// `[[0, 4], [6, 2], [1, 5], [7, 3]]`.
pub const BRAILLE_DITHER_THRESHOLDS: [[f64; BRAILLE_CELL_WIDTH]; BRAILLE_CELL_HEIGHT] = [
    [0.0625, 0.5625],
    [0.8125, 0.3125],
    [0.1875, 0.6875],
    [0.9375, 0.4375],
];

/// Dot raised for a shaded cell whose samples all fall below their thresholds.
///
/// A 2x4 cell has no middle dot. This is dot 2 (left column, second row), one
/// of the four dots touching the cell's middle, and the one whose glyph
/// `U+2802` reads as a centered speck in common terminal fonts.
pub const BRAILLE_FALLBACK_DOT: u8 = 0x02;

/// The six rasterizer variants: {ASCII, Braille} x {wireframe, culled wireframe, solid}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Every edge, one glyph per cell
    #[default]
    AsciiWireframe,
    /// Edges of front-facing triangles only
    AsciiCulled,
    /// Scanline-filled triangles using the shading ramp
    AsciiSolid,
    /// Every edge, 2x4 dots per cell
    BrailleWireframe,
    /// Edges of front-facing triangles, 2x4 dots per cell
    BrailleCulled,
    /// Scanline-filled triangles, dithered to dots
    BrailleSolid,
}

impl RenderMode {
    pub const ALL: [RenderMode; 6] = [
        RenderMode::AsciiWireframe,
        RenderMode::AsciiCulled,
        RenderMode::AsciiSolid,
        RenderMode::BrailleWireframe,
        RenderMode::BrailleCulled,
        RenderMode::BrailleSolid,
    ];

    /// Parse render mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_render3d_types::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_str("ascii"), Some(RenderMode::AsciiWireframe));
    /// assert_eq!(RenderMode::from_str("braille-culled"), Some(RenderMode::BrailleCulled));
    /// assert_eq!(RenderMode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascii" | "ascii-wireframe" => Some(RenderMode::AsciiWireframe),
            "ascii-culled" => Some(RenderMode::AsciiCulled),
            "ascii-solid" => Some(RenderMode::AsciiSolid),
            "braille" | "braille-wireframe" => Some(RenderMode::BrailleWireframe),
            "braille-culled" => Some(RenderMode::BrailleCulled),
            "braille-solid" => Some(RenderMode::BrailleSolid),
            _ => None,
        }
    }

    /// Convert to kebab-case string
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::AsciiWireframe => "ascii-wireframe",
            RenderMode::AsciiCulled => "ascii-culled",
            RenderMode::AsciiSolid => "ascii-solid",
            RenderMode::BrailleWireframe => "braille-wireframe",
            RenderMode::BrailleCulled => "braille-culled",
            RenderMode::BrailleSolid => "braille-solid",
        }
    }

    /// Next mode in [`RenderMode::ALL`] order, wrapping around.
    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn is_braille(&self) -> bool {
        matches!(
            self,
            RenderMode::BrailleWireframe | RenderMode::BrailleCulled | RenderMode::BrailleSolid
        )
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, RenderMode::AsciiSolid | RenderMode::BrailleSolid)
    }
}

/// Per-call shading style of the solid renderers.
///
/// - **Wireframe**: delegate to the wireframe path
/// - **Solid**: constant brightness ([`SOLID_BRIGHTNESS`])
/// - **Depth**: nearer faces are brighter
/// - **Lit**: Lambertian diffuse plus ambient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadingStyle {
    Wireframe,
    Solid,
    Depth,
    #[default]
    Lit,
}

impl ShadingStyle {
    /// Parse shading style from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_render3d_types::ShadingStyle;
    ///
    /// assert_eq!(ShadingStyle::from_str("LIT"), Some(ShadingStyle::Lit));
    /// assert_eq!(ShadingStyle::from_str("flat"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wireframe" => Some(ShadingStyle::Wireframe),
            "solid" => Some(ShadingStyle::Solid),
            "depth" => Some(ShadingStyle::Depth),
            "lit" => Some(ShadingStyle::Lit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingStyle::Wireframe => "wireframe",
            ShadingStyle::Solid => "solid",
            ShadingStyle::Depth => "depth",
            ShadingStyle::Lit => "lit",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ShadingStyle::Wireframe => ShadingStyle::Solid,
            ShadingStyle::Solid => ShadingStyle::Depth,
            ShadingStyle::Depth => ShadingStyle::Lit,
            ShadingStyle::Lit => ShadingStyle::Wireframe,
        }
    }
}

/// Optional render configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Only read by the solid modes.
    pub shading: ShadingStyle,
    pub wireframe_char: char,
    /// Normalized by the rasterizers before use, so any non-zero length works.
    pub light_direction: Vector3,
    pub aspect_correction: f64,
    pub ambient: f64,
    pub shading_ramp: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            shading: ShadingStyle::default(),
            wireframe_char: DEFAULT_WIREFRAME_CHAR,
            light_direction: DEFAULT_LIGHT_DIRECTION.normalize(),
            aspect_correction: DEFAULT_ASPECT_CORRECTION,
            ambient: DEFAULT_AMBIENT,
            shading_ramp: DEFAULT_SHADING_RAMP.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_shading(mut self, shading: ShadingStyle) -> Self {
        self.shading = shading;
        self
    }

    pub fn with_wireframe_char(mut self, ch: char) -> Self {
        self.wireframe_char = ch;
        self
    }

    /// Set the light direction (normalized on the way in).
    pub fn with_light_direction(mut self, dir: Vector3) -> Self {
        self.light_direction = dir.normalize();
        self
    }

    pub fn with_aspect_correction(mut self, factor: f64) -> Self {
        self.aspect_correction = factor;
        self
    }

    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the shading ramp. An empty ramp is ignored.
    pub fn with_shading_ramp(mut self, ramp: impl Into<String>) -> Self {
        let ramp = ramp.into();
        if !ramp.is_empty() {
            self.shading_ramp = ramp;
        }
        self
    }
}

/// Viewer actions mapped from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Cycle to the next render mode
    NextMode,
    /// Cycle to the next shading style
    NextShading,
    /// Orbit the camera around its target
    OrbitLeft,
    OrbitRight,
    OrbitUp,
    OrbitDown,
    /// Move the camera towards the target
    ZoomIn,
    /// Move the camera away from the target
    ZoomOut,
    /// Clear all particle systems
    ResetParticles,
    /// Toggle animation
    Pause,
}

impl ViewerAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_render3d_types::ViewerAction;
    ///
    /// assert_eq!(ViewerAction::from_str("nextMode"), Some(ViewerAction::NextMode));
    /// assert_eq!(ViewerAction::from_str("zoomout"), Some(ViewerAction::ZoomOut));
    /// assert_eq!(ViewerAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nextmode" => Some(ViewerAction::NextMode),
            "nextshading" => Some(ViewerAction::NextShading),
            "orbitleft" => Some(ViewerAction::OrbitLeft),
            "orbitright" => Some(ViewerAction::OrbitRight),
            "orbitup" => Some(ViewerAction::OrbitUp),
            "orbitdown" => Some(ViewerAction::OrbitDown),
            "zoomin" => Some(ViewerAction::ZoomIn),
            "zoomout" => Some(ViewerAction::ZoomOut),
            "resetparticles" => Some(ViewerAction::ResetParticles),
            "pause" => Some(ViewerAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerAction::NextMode => "nextMode",
            ViewerAction::NextShading => "nextShading",
            ViewerAction::OrbitLeft => "orbitLeft",
            ViewerAction::OrbitRight => "orbitRight",
            ViewerAction::OrbitUp => "orbitUp",
            ViewerAction::OrbitDown => "orbitDown",
            ViewerAction::ZoomIn => "zoomIn",
            ViewerAction::ZoomOut => "zoomOut",
            ViewerAction::ResetParticles => "resetParticles",
            ViewerAction::Pause => "pause",
        }
    }
}
