// Surface scan: find safe landing cells around a gateway's plane.
//
// Starting from one plane cell, each scanned cell looks at its five
// non-upward neighbors (down, north, east, south, west):
//
// - A plane neighbor is queued for scanning when the current cell is allowed
//   to traverse. Only plane cells reached by going *down* may traverse in
//   turn, so the walk follows the vertical spine of the plane and looks one
//   step sideways from each spine cell, never wandering laterally.
// - A frame neighbor is skipped.
// - Anything else is a landing candidate if it and the cell below are
//   breathable; it is recorded when the cell two below is standable. When the
//   air pocket is there, the next cell out in the same direction gets the same
//   test, to reach past the frame's edge.
//
// The walk is an explicit worklist over plane cells instead of recursion.
// Candidates come back deduplicated in discovery order.
//
// See also: `spawn.rs`, which picks one candidate at random, and
// `material.rs` for the breathable/standable tables.

use crate::config::MaterialPalette;
use crate::types::{Face, VoxelCoord};
use crate::world::VoxelGrid;
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// Landing cells found by one scan. A 2x3 plane yields at most 24.
pub type LandingCells = SmallVec<[VoxelCoord; 24]>;

/// Whether `cell` is a safe place to arrive: breathable at the cell and just
/// below it, with a standable floor two below.
pub fn is_safe_landing<G: VoxelGrid + ?Sized>(grid: &G, cell: VoxelCoord) -> bool {
    has_air_pocket(grid, cell) && has_floor(grid, cell)
}

fn has_air_pocket<G: VoxelGrid + ?Sized>(grid: &G, cell: VoxelCoord) -> bool {
    grid.material_at(cell).is_breathable() && grid.material_at(cell.below(1)).is_breathable()
}

fn has_floor<G: VoxelGrid + ?Sized>(grid: &G, cell: VoxelCoord) -> bool {
    grid.material_at(cell.below(2)).is_standable()
}

/// Collect safe landing cells beside the plane containing `start`.
///
/// With `traverse` false only `start`'s own neighbors are examined.
pub fn safe_landing_cells<G: VoxelGrid + ?Sized>(
    grid: &G,
    start: VoxelCoord,
    traverse: bool,
    materials: &MaterialPalette,
) -> LandingCells {
    let mut found = LandingCells::new();
    // Traversal only descends, so each plane cell is queued from exactly one
    // place and its traverse flag never changes between visits.
    let mut scanned: BTreeSet<VoxelCoord> = BTreeSet::new();
    let mut worklist = vec![(start, traverse)];

    while let Some((cell, traverse)) = worklist.pop() {
        if !scanned.insert(cell) {
            continue;
        }

        for face in Face::NON_UPWARD {
            let neighbor = cell.step(face);
            let material = grid.material_at(neighbor);

            if material == materials.plane {
                if traverse {
                    worklist.push((neighbor, face == Face::Down));
                }
                continue;
            }
            if material == materials.frame || !has_air_pocket(grid, neighbor) {
                continue;
            }

            if has_floor(grid, neighbor) {
                record(&mut found, neighbor);
            }
            let further = neighbor.step(face);
            if is_safe_landing(grid, further) {
                record(&mut found, further);
            }
        }
    }

    log::trace!(
        "surface scan from {start}: {} landing cell(s) over {} plane cell(s)",
        found.len(),
        scanned.len()
    );
    found
}

fn record(found: &mut LandingCells, cell: VoxelCoord) {
    if !found.contains(&cell) {
        found.push(cell);
    }
}
