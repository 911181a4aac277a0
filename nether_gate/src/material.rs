// Voxel classification: can an entity stand on, breathe in, or be crushed by
// a given material?
//
// Each predicate is a lookup into a 256-bit table built at compile time from
// a fixed id list. The lists are the whole definition; nothing here depends
// on the grid or on config.
//
// - Standable: everything except materials that need a block beneath them,
//   liquids, and blocks that would be destroyed if built upon.
// - Breathable: air and passable decorations. Fire is not breathable.
// - Unstable: liquids and gravity-affected blocks that can fall onto an
//   occupant.
//
// See also: `quality.rs` and `scan.rs`, the two consumers, and `build.rs`
// which uses all three while preparing terrain.

use crate::types::MaterialId;

/// Materials that cannot be stood on.
pub const NOT_STANDABLE: [u8; 16] = [0, 6, 8, 9, 10, 11, 37, 38, 39, 40, 50, 51, 59, 83, 85, 90];

/// Materials that leave a breathable pocket.
pub const BREATHABLE: [u8; 24] = [
    0, 6, 37, 38, 39, 40, 50, 55, 59, 63, 64, 65, 66, 68, 69, 70, 71, 72, 75, 76, 77, 83, 93, 94,
];

/// Materials that can fall on an occupant.
pub const UNSTABLE: [u8; 6] = [8, 9, 10, 11, 12, 13];

/// A set of material ids, one bit per possible `u8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialSet([u64; 4]);

impl MaterialSet {
    pub const fn from_ids(ids: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < ids.len() {
            let id = ids[i] as usize;
            bits[id / 64] |= 1u64 << (id % 64);
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(&self, material: MaterialId) -> bool {
        let id = material.0 as usize;
        self.0[id / 64] & (1u64 << (id % 64)) != 0
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }
}

static NOT_STANDABLE_SET: MaterialSet = MaterialSet::from_ids(&NOT_STANDABLE);
static BREATHABLE_SET: MaterialSet = MaterialSet::from_ids(&BREATHABLE);
static UNSTABLE_SET: MaterialSet = MaterialSet::from_ids(&UNSTABLE);

/// Whether an entity can stand on top of this material.
pub fn is_standable(material: MaterialId) -> bool {
    !NOT_STANDABLE_SET.contains(material)
}

/// Whether a cell of this material leaves room to breathe.
pub fn is_breathable(material: MaterialId) -> bool {
    BREATHABLE_SET.contains(material)
}

/// Whether this material can fall and crush whatever is below.
pub fn is_unstable(material: MaterialId) -> bool {
    UNSTABLE_SET.contains(material)
}

impl MaterialId {
    pub fn is_standable(self) -> bool {
        is_standable(self)
    }

    pub fn is_breathable(self) -> bool {
        is_breathable(self)
    }

    pub fn is_unstable(self) -> bool {
        is_unstable(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_materials() -> impl Iterator<Item = MaterialId> {
        (0..=u8::MAX).map(MaterialId)
    }

    #[test]
    fn standable_is_exact_complement_of_exclusions() {
        for m in all_materials() {
            assert_eq!(
                is_standable(m),
                !NOT_STANDABLE.contains(&m.0),
                "standable mismatch for {m}"
            );
        }
    }

    #[test]
    fn breathable_matches_inclusions() {
        for m in all_materials() {
            assert_eq!(is_breathable(m), BREATHABLE.contains(&m.0), "breathable mismatch for {m}");
        }
    }

    #[test]
    fn unstable_matches_inclusions() {
        for m in all_materials() {
            assert_eq!(is_unstable(m), UNSTABLE.contains(&m.0), "unstable mismatch for {m}");
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(NOT_STANDABLE_SET.len(), 16);
        assert_eq!(BREATHABLE_SET.len(), 24);
        assert_eq!(UNSTABLE_SET.len(), 6);
        assert!(!UNSTABLE_SET.is_empty());
        assert!(MaterialSet::from_ids(&[]).is_empty());
    }

    #[test]
    fn notable_materials() {
        // Fire blocks both standing and breathing.
        assert!(!MaterialId::FIRE.is_standable());
        assert!(!MaterialId::FIRE.is_breathable());
        // Air is breathable but not a floor.
        assert!(MaterialId::AIR.is_breathable());
        assert!(!MaterialId::AIR.is_standable());
        // Stone and obsidian are plain floors.
        assert!(MaterialId::STONE.is_standable());
        assert!(MaterialId::OBSIDIAN.is_standable());
        assert!(!MaterialId::STONE.is_breathable());
        // The portal plane is neither.
        assert!(!MaterialId::PORTAL.is_standable());
        assert!(!MaterialId::PORTAL.is_breathable());
        // Sand and gravel fall but can be stood on.
        assert!(MaterialId::SAND.is_unstable());
        assert!(MaterialId::GRAVEL.is_standable());
        assert!(MaterialId::LAVA.is_unstable());
        assert!(!MaterialId::NETHERRACK.is_unstable());
    }

    #[test]
    fn high_ids_are_plain_solids() {
        let m = MaterialId(255);
        assert!(m.is_standable());
        assert!(!m.is_breathable());
        assert!(!m.is_unstable());
    }
}
