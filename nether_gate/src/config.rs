// Data-driven gateway configuration.
//
// Every tunable number the locator, scorer, builder and resolver use lives in
// `GatewayConfig`, loadable from JSON. `GatewayConfig::default()` reproduces
// the classic behavior: a 16-column search radius, an 8-cell safety band at
// the top and bottom of the world, a 128-cell ceiling in the alternate
// dimension, and an early exit only on a perfect 28-point site.
//
// The materials the builder places are grouped in `MaterialPalette`, which
// also owns the environment -> fill material mapping (stone in `Normal`,
// netherrack in `Alternate`).
//
// See also: `build.rs` for how the band and margins drive the site search,
// `locate.rs` and `scan.rs` which key off `plane` and `frame`.

use crate::types::{Environment, MaterialId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a `GatewayConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read gateway config")]
    Io(#[from] std::io::Error),

    #[error("gateway config is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("invalid gateway config: {0}")]
    Invalid(String),
}

/// The materials the gateway code recognizes and places.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialPalette {
    /// Written into cleared pockets and the frame interior.
    pub air: MaterialId,
    /// Floor and roof patch material in `Normal` worlds.
    pub normal_fill: MaterialId,
    /// Floor and roof patch material in `Alternate` worlds.
    pub alternate_fill: MaterialId,
    /// The gateway's border ring.
    pub frame: MaterialId,
    /// The active plane inside a lit gateway. What the locator looks for.
    pub plane: MaterialId,
    /// Placed at the origin of a new gateway so the host forms the plane.
    pub ignition: MaterialId,
}

impl MaterialPalette {
    /// Fill material for patching floors and roofs in the given environment.
    pub fn fill_for(&self, environment: Environment) -> MaterialId {
        match environment {
            Environment::Normal => self.normal_fill,
            Environment::Alternate => self.alternate_fill,
        }
    }
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self {
            air: MaterialId::AIR,
            normal_fill: MaterialId::STONE,
            alternate_fill: MaterialId::NETHERRACK,
            frame: MaterialId::OBSIDIAN,
            plane: MaterialId::PORTAL,
            ignition: MaterialId::FIRE,
        }
    }
}

/// Tunable parameters for finding, building and leaving gateways.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Horizontal radius, in columns, for `find_gateway` callers that have
    /// no radius of their own.
    pub search_radius: i32,
    /// Build targets are clamped to `[height_margin, height - height_margin]`.
    pub height_margin: i32,
    /// The vertical site search probes down to `probe_margin + 1` and up to
    /// `height - probe_margin`.
    pub probe_margin: i32,
    /// Usable height in `Alternate` worlds, replacing the grid's own height.
    pub alternate_height_cap: i32,
    /// Site search stops at the first site scoring at least this much.
    pub good_enough_quality: u32,
    /// Squared radius of the disc of columns prepared around a new gateway.
    pub clear_radius_sq: f32,
    /// Half-width of the square the disc is cut from.
    pub clear_extent: i32,
    pub materials: MaterialPalette,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            search_radius: 16,
            height_margin: 8,
            probe_margin: 4,
            alternate_height_cap: 128,
            good_enough_quality: crate::quality::MAX_QUALITY,
            clear_radius_sq: 9.0,
            clear_extent: 4,
            materials: MaterialPalette::default(),
        }
    }
}

impl GatewayConfig {
    /// Parse and validate a config from a JSON string. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs the algorithms cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "search_radius must be non-negative, got {}",
                self.search_radius
            )));
        }
        if self.probe_margin < 0 || self.height_margin < self.probe_margin {
            return Err(ConfigError::Invalid(format!(
                "need 0 <= probe_margin <= height_margin, got {} and {}",
                self.probe_margin, self.height_margin
            )));
        }
        if self.alternate_height_cap <= 0 {
            return Err(ConfigError::Invalid(format!(
                "alternate_height_cap must be positive, got {}",
                self.alternate_height_cap
            )));
        }
        if self.clear_extent < 0 || self.clear_radius_sq.is_nan() || self.clear_radius_sq < 0.0 {
            return Err(ConfigError::Invalid(
                "clear_extent and clear_radius_sq must be non-negative".into(),
            ));
        }
        let m = &self.materials;
        if m.frame == m.plane {
            return Err(ConfigError::Invalid(format!(
                "frame and plane materials must differ, both are {}",
                m.frame
            )));
        }
        Ok(())
    }

    /// Height the builder treats as the top of the world.
    pub fn effective_max_height(&self, grid_height: i32, environment: Environment) -> i32 {
        match environment {
            Environment::Alternate => self.alternate_height_cap,
            Environment::Normal => grid_height,
        }
    }
}
