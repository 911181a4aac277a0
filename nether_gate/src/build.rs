// Gateway construction.
//
// Building runs five phases in a fixed order against the grid, each relying
// on the previous one's writes:
//
// 1. Clamp: keep the target's height within `height_margin` of the bottom and
//    top of the world. The top is the grid's own height in `Normal` worlds
//    and `alternate_height_cap` in `Alternate` ones.
// 2. Site search: walk outward from the clamped height, one cell down then one
//    cell up per step, scoring each cell with `site_quality`. A strictly
//    better score replaces the current best; the walk stops early once the
//    best reaches `good_enough_quality`, and otherwise runs until both
//    directions hit `probe_margin` from the ends. With nothing scoring above
//    zero the clamped target itself is used.
// 3. Terrain: over a disc of columns around the origin, patch a standable
//    floor under the origin's layer, open a three-cell breathable pocket, and
//    cap any unstable material just above the pocket with fill.
// 4. Frame: a 4-wide x 5-tall ring of frame material in the x/y plane at the
//    origin's z, with its 2x3 interior forced to air.
// 5. Ignite: the origin becomes the ignition material. Forming the plane from
//    the ignition is the host world's job.
//
// Building never fails. A poor site still gets a gateway; the returned
// quality tells the caller how poor.
//
// See also: `quality.rs` for the scoring probes, `config.rs` for margins and
// the material palette.

use crate::config::{GatewayConfig, MaterialPalette};
use crate::quality::site_quality;
use crate::types::{Environment, VoxelCoord};
use crate::world::VoxelGrid;
use serde::{Deserialize, Serialize};

/// The result of building a gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// The ignited cell: lower-x, bottom cell of the gateway interior.
    pub origin: VoxelCoord,
    /// Score of the chosen site before any terrain was touched. Zero when no
    /// probed height scored at all.
    pub quality: u32,
}

// ---------------------------------------------------------------------------
// Phase 1: clamp
// ---------------------------------------------------------------------------

/// Clamp a target height into `[height_margin, max_height - height_margin]`.
///
/// The upper bound is checked first, so a world too short for any band
/// clamps to the upper bound.
pub fn clamp_height(y: i32, max_height: i32, config: &GatewayConfig) -> i32 {
    let top = max_height - config.height_margin;
    if y > top {
        top
    } else if y < config.height_margin {
        config.height_margin
    } else {
        y
    }
}

// ---------------------------------------------------------------------------
// Phase 2: site search
// ---------------------------------------------------------------------------

/// Running best during the site search.
struct SiteSearch {
    best: VoxelCoord,
    best_quality: u32,
    good_enough: u32,
}

impl SiteSearch {
    /// Score `cell`; returns `true` once the search can stop.
    fn consider<G: VoxelGrid + ?Sized>(&mut self, grid: &G, cell: VoxelCoord) -> bool {
        let quality = site_quality(grid, cell);
        log::trace!("site {cell} scores {quality}");
        if quality > self.best_quality {
            self.best = cell;
            self.best_quality = quality;
            return quality >= self.good_enough;
        }
        false
    }
}

/// Find the best site in `start`'s column, nearest heights first.
///
/// Returns the chosen cell and its quality.
pub fn find_site<G: VoxelGrid + ?Sized>(
    grid: &G,
    start: VoxelCoord,
    max_height: i32,
    config: &GatewayConfig,
) -> (VoxelCoord, u32) {
    let mut search = SiteSearch {
        best: start,
        best_quality: 0,
        good_enough: config.good_enough_quality,
    };
    let low_stop = config.probe_margin;
    let high_stop = max_height - config.probe_margin;

    let (mut below, mut above) = (start.y, start.y);
    while below > low_stop || above <= high_stop {
        if below > low_stop && search.consider(grid, start.with_y(below)) {
            log::debug!("site search stopped early at y={below}");
            break;
        }
        if above <= high_stop && above != below && search.consider(grid, start.with_y(above)) {
            log::debug!("site search stopped early at y={above}");
            break;
        }
        below -= 1;
        above += 1;
    }

    (search.best, search.best_quality)
}

// ---------------------------------------------------------------------------
// Phase 3: terrain
// ---------------------------------------------------------------------------

/// Columns around `origin` that get terrain preparation.
///
/// The disc's center is shifted half a cell toward +x, toward the middle of
/// the 2-wide interior.
pub fn clearing_columns(origin: VoxelCoord, config: &GatewayConfig) -> Vec<(i32, i32)> {
    let e = config.clear_extent;
    let mut columns = Vec::new();
    for x in origin.x - e..=origin.x + e {
        for z in origin.z - e..=origin.z + e {
            let dx = (origin.x - x) as f32 + 0.5;
            let dz = (origin.z - z) as f32;
            if dx * dx + dz * dz < config.clear_radius_sq {
                columns.push((x, z));
            }
        }
    }
    columns
}

/// Give every disc column a floor, a three-cell air pocket and a safe roof.
pub fn prepare_terrain<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    origin: VoxelCoord,
    config: &GatewayConfig,
) {
    let materials = &config.materials;
    let fill = materials.fill_for(grid.environment());

    for (x, z) in clearing_columns(origin, config) {
        let column = VoxelCoord::new(x, origin.y, z);

        let floor = column.below(1);
        if !grid.material_at(floor).is_standable() {
            grid.set_material(floor, fill);
        }

        for dy in 0..3 {
            let cell = column.offset(0, dy, 0);
            if !grid.material_at(cell).is_breathable() {
                grid.set_material(cell, materials.air);
            }
        }

        let roof = column.offset(0, 3, 0);
        if grid.material_at(roof).is_unstable() {
            grid.set_material(roof, fill);
        }
    }
}

// ---------------------------------------------------------------------------
// Phase 4-5: frame and ignition
// ---------------------------------------------------------------------------

/// Whether `(xd, yd)`, relative to the origin, is on the frame's ring.
pub fn is_frame_ring(xd: i32, yd: i32) -> bool {
    xd == -1 || xd == 2 || yd == -1 || yd == 3
}

/// Lay the obsidian ring and empty the interior. Covers x in -1..=2 and
/// y in -1..=3 relative to `origin`, at `origin.z`.
pub fn place_frame<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    origin: VoxelCoord,
    materials: &MaterialPalette,
) {
    for xd in -1..=2 {
        for yd in -1..=3 {
            let material = if is_frame_ring(xd, yd) {
                materials.frame
            } else {
                materials.air
            };
            grid.set_material(origin.offset(xd, yd, 0), material);
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Build a gateway as close to `target` as a decent site allows.
pub fn build_gateway_with_quality<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    target: VoxelCoord,
    config: &GatewayConfig,
) -> BuildOutcome {
    let environment = grid.environment();
    let max_height = config.effective_max_height(grid.max_height(), environment);

    let start = target.with_y(clamp_height(target.y, max_height, config));
    if start != target {
        log::debug!("build target {target} clamped to {start}");
    }

    let (origin, quality) = find_site(grid, start, max_height, config);
    log::debug!(
        "building gateway at {origin} (quality {quality}, {})",
        match environment {
            Environment::Normal => "normal",
            Environment::Alternate => "alternate",
        }
    );

    prepare_terrain(grid, origin, config);
    place_frame(grid, origin, &config.materials);
    grid.set_material(origin, config.materials.ignition);

    BuildOutcome { origin, quality }
}

/// Build a gateway and return only its ignited origin.
pub fn build_gateway<G: VoxelGrid + ?Sized>(
    grid: &mut G,
    target: VoxelCoord,
    config: &GatewayConfig,
) -> VoxelCoord {
    build_gateway_with_quality(grid, target, config).origin
}
