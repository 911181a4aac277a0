// Gateway lookup: find an existing plane cell near a target.
//
// Columns are enumerated over the square bounding box of the search circle,
// x outer and z inner, keeping those with dx^2 + dz^2 <= radius^2. Each kept
// column is scanned from the top of the world down and the first plane cell
// wins. The first column that has one ends the search, so the result is *a*
// gateway inside the radius, not necessarily the nearest one.
//
// Worst case is O(radius^2 * height) reads; meant for interactive use with
// radii of a few dozen columns.

use crate::types::{MaterialId, VoxelCoord};
use crate::world::VoxelGrid;

/// Columns `(x, z)` within `radius` of `center`, in scan order.
pub fn columns_within(center: VoxelCoord, radius: i32) -> impl Iterator<Item = (i32, i32)> {
    let r_sq = i64::from(radius) * i64::from(radius);
    // Bounds saturate at the edge of the coordinate range.
    let xs = center.x.saturating_sub(radius)..=center.x.saturating_add(radius);
    xs.flat_map(move |x| {
        let zs = center.z.saturating_sub(radius)..=center.z.saturating_add(radius);
        zs.filter_map(move |z| {
            let dx = i64::from(center.x) - i64::from(x);
            let dz = i64::from(center.z) - i64::from(z);
            (dx * dx + dz * dz <= r_sq).then_some((x, z))
        })
    })
}

/// The highest cell of `plane` material in column `(x, z)`, if any.
pub fn topmost_in_column<G: VoxelGrid + ?Sized>(
    grid: &G,
    x: i32,
    z: i32,
    plane: MaterialId,
) -> Option<VoxelCoord> {
    (0..grid.max_height())
        .rev()
        .map(|y| VoxelCoord::new(x, y, z))
        .find(|&c| grid.material_at(c) == plane)
}

/// Find a plane cell in any column within `radius` of `target`.
///
/// A negative radius finds nothing.
pub fn find_plane_cell<G: VoxelGrid + ?Sized>(
    grid: &G,
    target: VoxelCoord,
    radius: i32,
    plane: MaterialId,
) -> Option<VoxelCoord> {
    if radius < 0 {
        return None;
    }
    let hit =
        columns_within(target, radius).find_map(|(x, z)| topmost_in_column(grid, x, z, plane));
    match hit {
        Some(cell) => log::debug!("gateway plane found at {cell} within {radius} of {target}"),
        None => log::debug!("no gateway within {radius} of {target}"),
    }
    hit
}
