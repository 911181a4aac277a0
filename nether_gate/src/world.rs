// The grid seam: the `VoxelGrid` trait the gateway algorithms read and write
// through, and `VoxelWorld`, a dense in-memory implementation.
//
// The algorithms never own a world. A host adapts its own world type to
// `VoxelGrid` (four methods) and passes `&G` or `&mut G` into each call.
// `VoxelWorld` is the implementation used by the tests, the benches and the
// demo binary.
//
// `VoxelWorld` stores a flat `Vec<MaterialId>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write access.
// Out-of-bounds reads return air; out-of-bounds writes are no-ops. Its
// `max_height()` is `size_y`.
//
// **Critical constraint: read-after-write.** Every read must observe the
// latest write. The builder clears terrain and then immediately re-reads it
// while placing the frame; an implementation that buffers writes would
// produce a broken gateway.

use crate::types::{Environment, MaterialId, VoxelCoord};

/// Anything that can be read and written as a grid of materials.
pub trait VoxelGrid {
    /// The material at `coord`.
    fn material_at(&self, coord: VoxelCoord) -> MaterialId;

    /// Overwrite the material at `coord`.
    fn set_material(&mut self, coord: VoxelCoord, material: MaterialId);

    /// Exclusive upper bound on y. Valid heights are `0..max_height()`.
    fn max_height(&self) -> i32;

    fn environment(&self) -> Environment;
}

/// Dense 3D voxel grid.
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z.
    voxels: Vec<MaterialId>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
    pub environment: Environment,
}

impl VoxelWorld {
    /// Create a new `Normal` world filled with air.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            voxels: vec![MaterialId::AIR; total],
            size_x,
            size_y,
            size_z,
            environment: Environment::Normal,
        }
    }

    /// Same world, tagged with a different environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Check whether a coordinate is within bounds.
    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as u32) < self.size_x
            && (coord.y as u32) < self.size_y
            && (coord.z as u32) < self.size_z
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            let x = coord.x as usize;
            let y = coord.y as usize;
            let z = coord.z as usize;
            let sx = self.size_x as usize;
            let sz = self.size_z as usize;
            Some(x + z * sx + y * sx * sz)
        } else {
            None
        }
    }

    /// Read a voxel. Returns air for out-of-bounds coordinates.
    pub fn get(&self, coord: VoxelCoord) -> MaterialId {
        self.index(coord)
            .map(|i| self.voxels[i])
            .unwrap_or(MaterialId::AIR)
    }

    /// Write a voxel. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, material: MaterialId) {
        if let Some(i) = self.index(coord) {
            self.voxels[i] = material;
        }
    }

    /// Fill every layer strictly below `y` with `material`.
    pub fn fill_below(&mut self, y: i32, material: MaterialId) {
        let top = y.clamp(0, self.size_y as i32);
        let layer = (self.size_x as usize) * (self.size_z as usize);
        let end = (top as usize) * layer;
        self.voxels[..end].fill(material);
    }

    /// Fill the inclusive box spanned by `a` and `b`, clipped to the world.
    pub fn fill_box(&mut self, a: VoxelCoord, b: VoxelCoord, material: MaterialId) {
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for z in a.z.min(b.z)..=a.z.max(b.z) {
                for x in a.x.min(b.x)..=a.x.max(b.x) {
                    self.set(VoxelCoord::new(x, y, z), material);
                }
            }
        }
    }

    /// Number of voxels of the given material.
    pub fn count(&self, material: MaterialId) -> usize {
        self.voxels.iter().filter(|&&m| m == material).count()
    }
}

impl VoxelGrid for VoxelWorld {
    fn material_at(&self, coord: VoxelCoord) -> MaterialId {
        self.get(coord)
    }

    fn set_material(&mut self, coord: VoxelCoord, material: MaterialId) {
        self.set(coord, material);
    }

    fn max_height(&self) -> i32 {
        self.size_y as i32
    }

    fn environment(&self) -> Environment {
        self.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_all_air() {
        let world = VoxelWorld::new(4, 4, 4);
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    assert_eq!(world.get(VoxelCoord::new(x, y, z)), MaterialId::AIR);
                }
            }
        }
        assert_eq!(world.environment(), Environment::Normal);
    }

    #[test]
    fn set_and_get() {
        let mut world = VoxelWorld::new(8, 8, 8);
        let coord = VoxelCoord::new(3, 5, 2);
        world.set(coord, MaterialId::OBSIDIAN);
        assert_eq!(world.get(coord), MaterialId::OBSIDIAN);
        assert_eq!(world.get(VoxelCoord::new(3, 5, 3)), MaterialId::AIR);
    }

    #[test]
    fn out_of_bounds_read_returns_air() {
        let world = VoxelWorld::new(4, 4, 4);
        assert_eq!(world.get(VoxelCoord::new(-1, 0, 0)), MaterialId::AIR);
        assert_eq!(world.get(VoxelCoord::new(0, -1, 0)), MaterialId::AIR);
        assert_eq!(world.get(VoxelCoord::new(0, 4, 0)), MaterialId::AIR);
        assert_eq!(world.get(VoxelCoord::new(100, 100, 100)), MaterialId::AIR);
    }

    #[test]
    fn out_of_bounds_write_is_noop() {
        let mut world = VoxelWorld::new(4, 4, 4);
        world.set(VoxelCoord::new(-1, 0, 0), MaterialId::STONE);
        world.set(VoxelCoord::new(100, 0, 0), MaterialId::STONE);
        assert_eq!(world.count(MaterialId::STONE), 0);
    }

    #[test]
    fn indexing_is_correct() {
        // x + z * size_x + y * size_x * size_z on a non-cubic world.
        let mut world = VoxelWorld::new(10, 8, 6);
        let coord = VoxelCoord::new(5, 3, 4);
        world.set(coord, MaterialId::PORTAL);
        assert_eq!(world.get(coord), MaterialId::PORTAL);
        assert_eq!(world.get(VoxelCoord::new(4, 3, 4)), MaterialId::AIR);
        assert_eq!(world.get(VoxelCoord::new(5, 2, 4)), MaterialId::AIR);
        assert_eq!(world.get(VoxelCoord::new(5, 3, 3)), MaterialId::AIR);
        assert_eq!(world.count(MaterialId::PORTAL), 1);
    }

    #[test]
    fn fill_below_stops_at_layer() {
        let mut world = VoxelWorld::new(4, 16, 4);
        world.fill_below(8, MaterialId::STONE);
        assert_eq!(world.get(VoxelCoord::new(2, 7, 1)), MaterialId::STONE);
        assert_eq!(world.get(VoxelCoord::new(2, 8, 1)), MaterialId::AIR);
        assert_eq!(world.count(MaterialId::STONE), 4 * 8 * 4);
        // Heights past the top are clipped.
        world.fill_below(100, MaterialId::DIRT);
        assert_eq!(world.count(MaterialId::DIRT), 4 * 16 * 4);
    }

    #[test]
    fn fill_box_is_inclusive_and_order_free() {
        let mut world = VoxelWorld::new(8, 8, 8);
        world.fill_box(VoxelCoord::new(3, 3, 3), VoxelCoord::new(1, 2, 1), MaterialId::SAND);
        assert_eq!(world.count(MaterialId::SAND), 3 * 2 * 3);
    }

    #[test]
    fn grid_trait_reports_dimensions() {
        let world = VoxelWorld::new(2, 40, 2).with_environment(Environment::Alternate);
        assert_eq!(world.max_height(), 40);
        assert_eq!(world.environment(), Environment::Alternate);
    }
}
